//! Service-binding handlers.
//!
//! Responsibilities:
//! - Parse the binding request (service/plan ids, app guid, optional policy)
//! - Run the plan-limit validation step
//! - Map `Continue` to the store hand-off (201) and `Fail` to a 400 carrying
//!   the violation list
//!
//! The policy payload stays raw until validated; entries inside it are never
//! structurally inspected here.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use serde_json::value::RawValue;

use scalegate_core::error::ClientCode;
use scalegate_core::policy::{ScalingPolicy, Violation};

use crate::app_state::AppState;
use crate::store::StoredBinding;
use crate::validation::step::{self, BindingIdentity, StepOutcome};

/// Binding request body (OSB-style).
#[derive(Debug, Deserialize)]
pub struct BindingRequest {
    pub service_id: String,
    pub plan_id: String,
    #[serde(default)]
    pub app_guid: Option<String>,
    /// Scaling policy submitted with the binding, raw until validated.
    #[serde(default)]
    pub parameters: Option<Box<RawValue>>,
}

fn error_json(code: ClientCode, msg: &str) -> serde_json::Value {
    json!({
        "code": code.as_str(),
        "description": msg,
    })
}

fn violations_json(violations: &[Violation]) -> serde_json::Value {
    json!({
        "code": ClientCode::PolicyLimitExceeded.as_str(),
        "violations": violations,
    })
}

/// PUT /v2/service_instances/{instance_id}/service_bindings/{binding_id}
pub async fn bind(
    State(state): State<AppState>,
    Path((instance_id, binding_id)): Path<(String, String)>,
    Json(req): Json<BindingRequest>,
) -> Response {
    // 1) Parse the optional policy out of `parameters` (lazy until here).
    let policy = match req.parameters.as_deref() {
        Some(raw) => match serde_json::from_str::<ScalingPolicy>(raw.get()) {
            Ok(p) => Some(p),
            Err(e) => {
                state
                    .metrics()
                    .bad_requests_total
                    .inc(&[("reason", "parameters")]);
                return (
                    StatusCode::BAD_REQUEST,
                    Json(error_json(
                        ClientCode::BadRequest,
                        &format!("invalid parameters: {e}"),
                    )),
                )
                    .into_response();
            }
        },
        None => None,
    };

    // 2) Validate against the plan's limits.
    let identity = BindingIdentity {
        app_guid: req.app_guid.as_deref().unwrap_or("-"),
        service_id: &req.service_id,
        plan_id: &req.plan_id,
    };

    match step::run(&state, identity, policy.as_ref()) {
        StepOutcome::Fail(violations) => {
            (StatusCode::BAD_REQUEST, Json(violations_json(&violations))).into_response()
        }
        StepOutcome::Continue => {
            // 3) Hand off to the persistence stage.
            let binding = StoredBinding {
                binding_id: binding_id.clone(),
                instance_id,
                app_guid: req.app_guid,
                service_id: req.service_id,
                plan_id: req.plan_id,
                policy_json: req.parameters.map(|r| r.get().to_string()),
            };

            if let Err(e) = state.store().put(binding).await {
                tracing::error!(error = %e, binding_id = %binding_id, "binding store write failed");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(error_json(ClientCode::Internal, "binding store write failed")),
                )
                    .into_response();
            }

            state.metrics().bindings_active.inc(&[]);
            (StatusCode::CREATED, Json(json!({}))).into_response()
        }
    }
}

/// DELETE /v2/service_instances/{instance_id}/service_bindings/{binding_id}
pub async fn unbind(
    State(state): State<AppState>,
    Path((instance_id, binding_id)): Path<(String, String)>,
) -> Response {
    match state.store().delete(&binding_id).await {
        Ok(true) => {
            state.metrics().bindings_active.dec(&[]);
            tracing::info!(instance_id = %instance_id, binding_id = %binding_id, "binding removed");
            (StatusCode::OK, Json(json!({}))).into_response()
        }
        // 410 per broker convention: the binding is already gone.
        Ok(false) => (StatusCode::GONE, Json(json!({}))).into_response(),
        Err(e) => {
            tracing::error!(error = %e, binding_id = %binding_id, "binding store delete failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(error_json(ClientCode::Internal, "binding store delete failed")),
            )
                .into_response()
        }
    }
}
