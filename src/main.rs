use anyhow::Result;
use std::sync::Arc;
use tlsgate::{Config, SharedConfig};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_init();

    let config = config_init(std::env::args().nth(1))?;
    tracing::info!("allow-list has {} domain(s)", config.allowed_domains.len());
    for domain in config.allowed_domains.iter() {
        tracing::debug!("allowing \"{domain}\"");
    }

    let api_server = tlsgate::new_http(config.clone())?;
    println!("{}", readiness_line(api_server.local_addr().port()));
    tracing::info!("API listening on {}", api_server.local_addr());
    let api_handle = tokio::spawn(api_server);

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("quitting from signal");
        },
        api_res = api_handle => {
            api_res??;
        }
    }
    tracing::info!("goodbye");
    Ok(())
}

fn readiness_line(port: u16) -> String {
    format!("Server is running on port :{port}\nhttp://localhost:{port}/")
}

fn tracing_init() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tlsgate=info,tower_http=info".into()),
        )
        .init();
}

fn config_init(config_file: Option<String>) -> Result<SharedConfig> {
    let config = match config_file {
        None => {
            tracing::debug!("no config file given, using defaults");
            Config::default()
        }
        Some(config_file) => {
            let config = Config::try_from_file(&config_file)?;
            tracing::debug!("loaded config from {config_file}");
            config
        }
    };
    Ok(Arc::new(config))
}
