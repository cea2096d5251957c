use crate::api::routes;
use crate::config::SharedConfig;
use crate::error::Error;
use axum::routing::IntoMakeService;
use axum::Router;
use hyper::server::conn::AddrIncoming;

#[derive(Clone)]
pub(super) struct AppState {
    pub config: SharedConfig,
}

/// A bound, not yet running, HTTP API server. Await it to serve requests.
pub type ApiServer = axum::Server<AddrIncoming, IntoMakeService<Router>>;

/// Bind the HTTP API to [`Config::api_bind_addr`][crate::config::Config::api_bind_addr].
///
/// # Errors
///
/// Returns [`Error::Bind`] if the address can't be bound, e.g. because it is already in use.
pub fn new(config: SharedConfig) -> Result<ApiServer, Error> {
    let builder = axum::Server::try_bind(&config.api_bind_addr)?;
    Ok(builder.serve(routes::new(AppState { config }).into_make_service()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::sync::Arc;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;

    fn loopback_config() -> Config {
        Config {
            api_bind_addr: "127.0.0.1:0".parse().unwrap(),
            ..Config::default()
        }
    }

    async fn raw_get(addr: std::net::SocketAddr, path: &str) -> String {
        let mut stream = TcpStream::connect(addr).await.unwrap();
        let request = format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
        stream.write_all(request.as_bytes()).await.unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();
        response
    }

    #[tokio::test]
    async fn serves_over_tcp() {
        let server = new(Arc::new(loopback_config())).unwrap();
        let addr = server.local_addr();
        assert_ne!(addr.port(), 0);
        tokio::spawn(server);

        let response = raw_get(addr, "/").await;
        assert!(response.starts_with("HTTP/1.1 200 OK"), "{response}");
        assert!(response.ends_with("Hello World"), "{response}");

        let response = raw_get(addr, "/tls-check?domain=evil.com").await;
        assert!(response.starts_with("HTTP/1.1 403 Forbidden"), "{response}");
        assert!(
            response.ends_with(r#"{"error":"Domain is not whitelisted"}"#),
            "{response}"
        );
    }

    #[tokio::test]
    async fn bind_conflict_is_an_error() {
        let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let config = Config {
            api_bind_addr: taken.local_addr().unwrap(),
            ..Config::default()
        };
        assert!(matches!(new(Arc::new(config)), Err(Error::Bind(_))));
    }
}
