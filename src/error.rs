//! Error types.

/// Error enumerates the possible TLS Gate error states.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Returned when clients `GET` the [`/tls-check` API endpoint][crate::api#tls-check-get]
    /// without a `domain` query parameter, or with an empty one.
    #[error("Domain is required")]
    DomainRequired,

    /// Returned when clients `GET` the [`/tls-check` API endpoint][crate::api#tls-check-get]
    /// with a `domain` that isn't in the [`Config::allowed_domains`][crate::config::Config]
    /// allow-list, or that gives `domain` more than once.
    #[error("Domain is not whitelisted")]
    DomainNotWhitelisted,

    /// Returned when an [`AllowList`][crate::allow_list::AllowList] is built from a list
    /// containing an empty string. Such an entry could never match since an empty `domain`
    /// is always treated as missing.
    #[error("allow-list entries must not be empty")]
    EmptyAllowListEntry,

    /// Returned when a generic IO error occurs.
    #[error("an IO error occurred")]
    IO(#[from] std::io::Error),

    /// Returned when [trying to load a `Config`][crate::config::Config::try_from_file] fails
    /// due to invalid JSON content.
    #[error("invalid JSON")]
    InvalidJSON(#[from] serde_json::Error),

    /// Returned when the HTTP API can't bind
    /// [`Config::api_bind_addr`][crate::config::Config::api_bind_addr].
    #[error("failed to bind HTTP API listener")]
    Bind(#[from] hyper::Error),
}
