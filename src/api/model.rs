use serde::{Deserialize, Serialize};

const WHITELISTED_MESSAGE: &str = "Domain is whitelisted";

/// Every `domain` value in the query string. Both the repeated key form
/// (`domain=a&domain=b`) and the array form (`domain[]=a`) are collected.
#[derive(Deserialize, Debug)]
pub(super) struct TlsCheckRequest {
    #[serde(default)]
    domain: Vec<String>,
    #[serde(default, rename = "domain[]")]
    domain_array: Vec<String>,
}

/// How the client supplied `domain`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum DomainParam<'a> {
    /// Absent, or given exactly once as a plain value.
    Single(Option<&'a str>),
    /// Given more than once, or in array form. Never matches an allow-list entry.
    Multiple,
}

impl TlsCheckRequest {
    pub fn domain(&self) -> DomainParam<'_> {
        if !self.domain_array.is_empty() {
            return DomainParam::Multiple;
        }
        match self.domain.as_slice() {
            [] => DomainParam::Single(None),
            [domain] => DomainParam::Single(Some(domain)),
            _ => DomainParam::Multiple,
        }
    }
}

#[derive(Serialize, Debug, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub(super) struct TlsCheckResult {
    pub message: &'static str,
}

impl TlsCheckResult {
    pub fn whitelisted() -> Self {
        Self {
            message: WHITELISTED_MESSAGE,
        }
    }
}
