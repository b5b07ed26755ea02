use std::collections::HashSet;

use serde::Deserialize;

use scalegate_core::error::{Result, ScaleGateError};

/// Limit keys a plan may configure for policy contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitKey {
    RecurringScheduleCount,
    SpecificDateCount,
    ScalingRulesCount,
}

impl LimitKey {
    pub const ALL: [LimitKey; 3] = [
        LimitKey::RecurringScheduleCount,
        LimitKey::SpecificDateCount,
        LimitKey::ScalingRulesCount,
    ];

    /// Key name as it appears in the catalog document.
    pub fn as_str(self) -> &'static str {
        match self {
            LimitKey::RecurringScheduleCount => "recurring_schedule_count",
            LimitKey::SpecificDateCount => "specific_date_count",
            LimitKey::ScalingRulesCount => "scaling_rules_count",
        }
    }
}

/// Static registry of services and their plans.
#[derive(Debug, Deserialize)]
pub struct PlanCatalog {
    #[serde(default)]
    pub services: Vec<ServiceEntry>,
}

#[derive(Debug, Deserialize)]
pub struct ServiceEntry {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub plans: Vec<PlanEntry>,
}

/// One plan tier with its policy limits.
///
/// Broker catalogs carry additional marketing fields (description, free flag,
/// metadata); those are kept but not interpreted here.
#[derive(Debug, Deserialize)]
pub struct PlanEntry {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub recurring_schedule_count: Option<u64>,
    #[serde(default)]
    pub specific_date_count: Option<u64>,
    #[serde(default)]
    pub scaling_rules_count: Option<u64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl PlanEntry {
    /// Configured limit for `key`, or `None` when the plan does not set one.
    pub fn limit(&self, key: LimitKey) -> Option<u64> {
        match key {
            LimitKey::RecurringScheduleCount => self.recurring_schedule_count,
            LimitKey::SpecificDateCount => self.specific_date_count,
            LimitKey::ScalingRulesCount => self.scaling_rules_count,
        }
    }
}

impl PlanCatalog {
    /// Look up the limit configured for `key` on the given service/plan pair.
    ///
    /// Absent service, absent plan, or an unconfigured key all come back as
    /// `None` ("no limit"); this never errors. The catalog is small and
    /// static, so a linear scan is all the indexing this needs.
    pub fn limit(&self, service_id: &str, plan_id: &str, key: LimitKey) -> Option<u64> {
        let service = self.services.iter().find(|s| s.id == service_id)?;
        let plan = service.plans.iter().find(|p| p.id == plan_id)?;
        plan.limit(key)
    }

    /// Startup validation: identifiers must be unique within their scope.
    pub fn validate(&self) -> Result<()> {
        let mut service_ids = HashSet::new();
        for service in &self.services {
            if !service_ids.insert(service.id.as_str()) {
                return Err(ScaleGateError::BadRequest(format!(
                    "duplicate service id in catalog: {}",
                    service.id
                )));
            }
            let mut plan_ids = HashSet::new();
            for plan in &service.plans {
                if !plan_ids.insert(plan.id.as_str()) {
                    return Err(ScaleGateError::BadRequest(format!(
                        "duplicate plan id in catalog: {} (service {})",
                        plan.id, service.id
                    )));
                }
            }
        }
        Ok(())
    }
}
