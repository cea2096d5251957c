//! TLS Gate
//!
//! A very small HTTP service answering whether a domain is allowed to be served over TLS by a
//! multi-tenant SaaS platform.
//!
//! TLS terminating proxies that obtain certificates on demand (e.g. [Caddy]'s
//! [on-demand TLS]) ask an HTTP endpoint before issuing a certificate for an unseen hostname.
//! TLS Gate is that endpoint: it checks the hostname against a fixed [allow-list] and answers
//! with a status code. It never performs a TLS handshake itself.
//!
//! See the [HTTP API][api] for endpoint details and [`Config`] for configuration.
//!
//! [Caddy]: https://caddyserver.com
//! [on-demand TLS]: https://caddyserver.com/docs/automatic-https#on-demand-tls
//! [allow-list]: allow_list::AllowList
//!
#![warn(clippy::pedantic)]

pub mod allow_list;
pub mod api;
pub mod config;
pub mod error;

pub use allow_list::{AllowList, CheckResult};
pub use api::new as new_http;
pub use config::{Config, SharedConfig};
