//! HTTP request handlers

use super::AppState;
use crate::ussd::{RawUssdRequest, Reply, RequestError};
use axum::{
    extract::{rejection::FormRejection, State},
    routing::get,
    Form, Router,
};

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Gateway callback: form POST, or query string on GET
        .route("/", get(ussd_callback).post(ussd_callback))
        .route("/version", get(get_version))
        .with_state(state)
}

/// Every outcome is a framed USSD reply, including unparsable requests
async fn ussd_callback(
    State(state): State<AppState>,
    form: Result<Form<RawUssdRequest>, FormRejection>,
) -> String {
    let reply = match form {
        Ok(Form(raw)) => state.runtime.handle_raw(raw).await,
        Err(rejection) => {
            let e = RequestError::Malformed(rejection.body_text());
            tracing::warn!(error = %e, "Rejecting USSD request");
            Reply::failure()
        }
    };
    reply.to_string()
}

async fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
