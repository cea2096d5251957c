use crate::allow_list::CheckResult;
use crate::api::api_error::APIError;
use crate::api::model::{DomainParam, TlsCheckRequest, TlsCheckResult};
use crate::api::server::AppState;
use crate::error::Error;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use axum_extra::extract::{Query, WithRejection};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub(super) fn new(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/tls-check", get(tls_check))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(state.config.api_timeout))
        .with_state(state)
}

#[allow(clippy::unused_async)]
async fn root() -> &'static str {
    "Hello World"
}

#[allow(clippy::unused_async)]
async fn tls_check(
    State(state): State<AppState>,
    WithRejection(Query(params), _): WithRejection<Query<TlsCheckRequest>, APIError>,
) -> Result<Json<TlsCheckResult>, APIError> {
    let domain = params.domain();
    let result = match domain {
        DomainParam::Single(domain) => state.config.allowed_domains.check(domain),
        DomainParam::Multiple => CheckResult::NotWhitelisted,
    };
    match result {
        CheckResult::Whitelisted => {
            tracing::debug!("allowed TLS for {domain:?}");
            Ok(Json(TlsCheckResult::whitelisted()))
        }
        CheckResult::MissingDomain => Err(Error::DomainRequired.into()),
        CheckResult::NotWhitelisted => {
            let err = Error::DomainNotWhitelisted;
            tracing::debug!("rejected TLS for {domain:?}: {err}");
            Err(err.into())
        }
    }
}
