//! HTTP API for checking whether a domain may be issued a TLS certificate.
//!
//! Intended as the target of an on-demand TLS "ask" hook: a TLS terminating proxy asks
//! before obtaining a certificate for a previously unseen hostname. The API only answers
//! the question. It performs no TLS itself.
//!
//! # API Endpoints
//!
//! ## `/` (GET)
//!
//!   Returns HTTP 200 (OK) and the plain text body `Hello World`, regardless of query
//!   parameters or headers. Used as a liveness probe.
//!
//! ## `/tls-check` (GET)
//!
//!   Expects a `domain` query parameter:
//!
//!   ```bash
//!   ❯ curl -i 'http://localhost:8080/tls-check?domain=snapfreak.com'
//!   HTTP/1.1 200 OK
//!   content-type: application/json
//!
//!   {"message":"Domain is whitelisted"}
//!   ```
//!
//!  The domain is compared exactly (case-sensitive, no wildcards) against the configured
//!  [`AllowList`][crate::allow_list::AllowList].
//!
//!  | outcome | status | body |
//!  |---|---|---|
//!  | allowed | 200 | `{"message":"Domain is whitelisted"}` |
//!  | `domain` absent or empty | 400 | `{"error":"Domain is required"}` |
//!  | not allowed | 403 | `{"error":"Domain is not whitelisted"}` |
//!
//!  A `domain` given more than once (`domain=a&domain=b`) or in array form (`domain[]=a`)
//!  never matches and is answered with HTTP 403 `{"error":"Domain is not whitelisted"}`.

mod api_error;
mod model;
mod routes;
pub mod server;

pub use server::new;
