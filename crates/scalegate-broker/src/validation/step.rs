//! Per-request validation step ahead of policy persistence.
//!
//! The step extracts nothing itself; the API layer hands it the parsed policy
//! plus the identifiers that came with the request, and it returns an outcome
//! value. There is no callback to forget to wire: every call produces either
//! `Continue` or `Fail` for the caller to act on.

use scalegate_core::policy::{ScalingPolicy, Violation};

use crate::app_state::AppState;
use crate::validation::limits;

/// Outcome of the validation step.
#[derive(Debug)]
pub enum StepOutcome {
    /// Policy fits the plan (or carries nothing to check); proceed to the
    /// next stage.
    Continue,
    /// One or more plan limits exceeded; reject with the violation list.
    Fail(Vec<Violation>),
}

/// Identifiers carried alongside the policy document.
#[derive(Debug, Clone, Copy)]
pub struct BindingIdentity<'a> {
    pub app_guid: &'a str,
    pub service_id: &'a str,
    pub plan_id: &'a str,
}

/// Run plan-limit validation for one binding request.
pub fn run(
    state: &AppState,
    identity: BindingIdentity<'_>,
    policy: Option<&ScalingPolicy>,
) -> StepOutcome {
    let Some(policy) = policy else {
        tracing::info!(
            app_guid = identity.app_guid,
            service_id = identity.service_id,
            plan_id = identity.plan_id,
            "binding carries no policy, nothing to validate"
        );
        return StepOutcome::Continue;
    };

    let violations =
        limits::validate_policy(state.catalog(), policy, identity.service_id, identity.plan_id);

    if violations.is_empty() {
        state.metrics().validations_total.inc(&[("outcome", "pass")]);
        tracing::info!(
            app_guid = identity.app_guid,
            service_id = identity.service_id,
            plan_id = identity.plan_id,
            "policy fits plan limits, continuing"
        );
        return StepOutcome::Continue;
    }

    for v in &violations {
        state
            .metrics()
            .policy_violations_total
            .inc(&[("property", v.property.as_str())]);
    }
    state.metrics().validations_total.inc(&[("outcome", "fail")]);

    tracing::error!(
        app_guid = identity.app_guid,
        service_id = identity.service_id,
        plan_id = identity.plan_id,
        violations = ?violations,
        "policy exceeds plan limits"
    );

    StepOutcome::Fail(violations)
}
