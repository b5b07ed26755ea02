//! Axum router wiring (binding API + ops endpoints).

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, put},
    Router,
};

use crate::{api, app_state::AppState, ops};

pub fn build_router(state: AppState) -> Router {
    let max_body = state.cfg().broker.max_body_bytes;

    Router::new()
        .route(
            "/v2/service_instances/:instance_id/service_bindings/:binding_id",
            put(api::bindings::bind).delete(api::bindings::unbind),
        )
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .route("/metrics", get(ops::metrics))
        .layer(DefaultBodyLimit::max(max_body))
        .with_state(state)
}
