use crate::allow_list::AllowList;
use crate::error::Error;
use serde::Deserialize;
use serde_with::{serde_as, DurationSeconds};
use std::fs::File;
use std::io::{BufReader, Read};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

pub type SharedConfig = Arc<Config>;

const DEFAULT_API_PORT: u16 = 8080;
const DEFAULT_API_TIMEOUT: Duration = Duration::from_secs(30);

/// Process configuration, loaded once at startup. Every key is optional in the JSON form;
/// absent keys take the [`Default`] values.
#[serde_as]
#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    #[serde(default = "default_api_bind_addr")]
    pub api_bind_addr: SocketAddr,
    #[serde_as(as = "DurationSeconds<u64>")]
    #[serde(default = "default_api_timeout")]
    pub api_timeout: Duration,
    #[serde(default)]
    pub allowed_domains: AllowList,
}

fn default_api_bind_addr() -> SocketAddr {
    SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_API_PORT)
}

fn default_api_timeout() -> Duration {
    DEFAULT_API_TIMEOUT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_bind_addr: default_api_bind_addr(),
            api_timeout: default_api_timeout(),
            allowed_domains: AllowList::default(),
        }
    }
}

impl Config {
    /// Load a [`Config`] from the JSON file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IO`] if the path can't be opened, or [`Error::InvalidJSON`] if the
    /// content isn't a valid config (including an empty `allowed_domains` entry).
    pub fn try_from_file(p: impl AsRef<Path>) -> Result<Self, Error> {
        let f = File::open(p)?;
        Self::try_from_reader(BufReader::new(f))
    }

    /// Load a [`Config`] from JSON read from `reader`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidJSON`] if the content isn't a valid config.
    pub fn try_from_reader(reader: impl Read) -> Result<Self, Error> {
        Ok(serde_json::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let config = Config::try_from_reader("{}".as_bytes()).unwrap();
        assert_eq!(config.api_bind_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.api_timeout, Duration::from_secs(30));
        assert_eq!(config.allowed_domains, AllowList::default());
    }

    #[test]
    fn full_config() {
        let json = r#"{
            "api_bind_addr": "127.0.0.1:3000",
            "api_timeout": 5,
            "allowed_domains": ["shop.example.com", "example.com"]
        }"#;
        let config = Config::try_from_reader(json.as_bytes()).unwrap();
        assert_eq!(config.api_bind_addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.api_timeout, Duration::from_secs(5));
        assert_eq!(config.allowed_domains.len(), 2);
        assert!(config.allowed_domains.contains("shop.example.com"));
        assert!(!config.allowed_domains.contains("snapfreak.com"));
    }

    #[test]
    fn empty_allowed_domain_is_rejected() {
        let json = r#"{ "allowed_domains": ["example.com", ""] }"#;
        let res = Config::try_from_reader(json.as_bytes());
        assert!(matches!(res, Err(Error::InvalidJSON(_))));
    }

    #[test]
    fn invalid_bind_addr_is_rejected() {
        let json = r#"{ "api_bind_addr": "not-an-addr" }"#;
        let res = Config::try_from_reader(json.as_bytes());
        assert!(matches!(res, Err(Error::InvalidJSON(_))));
    }

    #[test]
    fn missing_file() {
        let res = Config::try_from_file("/nonexistent/tlsgate.json");
        assert!(matches!(res, Err(Error::IO(_))));
    }
}
