//! Plan-limit checks for submitted scaling policies.

use scalegate_core::policy::{ScalingPolicy, Violation};

use crate::catalog::{LimitKey, PlanCatalog};

pub const RECURRING_SCHEDULE_EXCEEDED: &str =
    "policy exceeded recurring_schedule as per plan of service";
pub const SPECIFIC_DATE_EXCEEDED: &str =
    "policy exceeded specific_date as per plan of service";
pub const SCALING_RULES_EXCEEDED: &str =
    "policy exceeded scaling rules as per plan of service";

/// Compare the three watched collections of `policy` against the limits the
/// catalog configures for the given service/plan pair.
///
/// The checks are independent and always all evaluated; a policy breaching
/// several limits reports one violation per breach, in fixed order
/// (recurring_schedule, specific_date, scaling_rules). An absent limit
/// (unknown service, unknown plan, or key not configured) never counts as
/// exceeded.
pub fn validate_policy(
    catalog: &PlanCatalog,
    policy: &ScalingPolicy,
    service_id: &str,
    plan_id: &str,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    if exceeds(
        policy.recurring_schedule_len(),
        catalog.limit(service_id, plan_id, LimitKey::RecurringScheduleCount),
    ) {
        violations.push(Violation::new(
            "schedules.recurring_schedule",
            RECURRING_SCHEDULE_EXCEEDED,
            plan_id,
            service_id,
        ));
    }

    if exceeds(
        policy.specific_date_len(),
        catalog.limit(service_id, plan_id, LimitKey::SpecificDateCount),
    ) {
        violations.push(Violation::new(
            "schedules.specific_date",
            SPECIFIC_DATE_EXCEEDED,
            plan_id,
            service_id,
        ));
    }

    if exceeds(
        policy.scaling_rules_len(),
        catalog.limit(service_id, plan_id, LimitKey::ScalingRulesCount),
    ) {
        violations.push(Violation::new(
            "scaling_rules",
            SCALING_RULES_EXCEEDED,
            plan_id,
            service_id,
        ));
    }

    violations
}

/// A field only violates when it is present and a limit is configured.
fn exceeds(len: Option<usize>, limit: Option<u64>) -> bool {
    match (len, limit) {
        (Some(len), Some(limit)) => len as u64 > limit,
        _ => false,
    }
}
