//! Domain allow-list.
//!
//! An [`AllowList`] is built once at startup, either from the compiled-in
//! [`DEFAULT_DOMAINS`] or from [`Config::allowed_domains`][crate::config::Config], and is
//! read-only for the rest of the process lifetime.
//!
//! Matching is exact and case-sensitive. There is no wildcard or subdomain matching, so
//! `user-4.snapfreak.com` is not permitted just because `snapfreak.com` is.
use crate::error::Error;
use axum::http::StatusCode;
use serde::Deserialize;
use std::collections::HashSet;

/// Domains permitted when no configuration overrides the allow-list.
pub const DEFAULT_DOMAINS: [&str; 4] = [
    "user-1.snapfreak.com",
    "user-2.snapfreak.com",
    "user-3.snapfreak.com",
    "snapfreak.com",
];

/// An immutable set of domain names permitted to proceed with TLS.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<String>")]
#[allow(clippy::module_name_repetitions)]
pub struct AllowList {
    domains: HashSet<String>,
}

/// The outcome of [checking][AllowList::check] a domain against an [`AllowList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckResult {
    MissingDomain,
    Whitelisted,
    NotWhitelisted,
}

impl CheckResult {
    /// The HTTP status the [`/tls-check` endpoint][crate::api#tls-check-get] answers with.
    #[must_use]
    pub fn status(self) -> StatusCode {
        match self {
            CheckResult::MissingDomain => StatusCode::BAD_REQUEST,
            CheckResult::Whitelisted => StatusCode::OK,
            CheckResult::NotWhitelisted => StatusCode::FORBIDDEN,
        }
    }
}

impl AllowList {
    /// Returns true iff `domain` is exactly one of the allowed domains.
    #[must_use]
    pub fn contains(&self, domain: &str) -> bool {
        self.domains.contains(domain)
    }

    /// Check an optional domain against the allow-list.
    ///
    /// An absent or empty domain is [`CheckResult::MissingDomain`]. No other validation or
    /// normalization is applied: `SNAPFREAK.com` and `snapfreak.com.` are distinct from
    /// `snapfreak.com`.
    #[must_use]
    pub fn check(&self, domain: Option<&str>) -> CheckResult {
        match domain {
            None | Some("") => CheckResult::MissingDomain,
            Some(domain) if self.contains(domain) => CheckResult::Whitelisted,
            Some(_) => CheckResult::NotWhitelisted,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.domains.iter().map(String::as_str)
    }
}

impl Default for AllowList {
    fn default() -> Self {
        Self {
            domains: DEFAULT_DOMAINS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl TryFrom<Vec<String>> for AllowList {
    type Error = Error;

    fn try_from(domains: Vec<String>) -> Result<Self, Self::Error> {
        if domains.iter().any(String::is_empty) {
            return Err(Error::EmptyAllowListEntry);
        }
        Ok(Self {
            domains: domains.into_iter().collect(),
        })
    }
}
