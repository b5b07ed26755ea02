//! Violation record produced by plan-limit validation.

use serde::Serialize;

/// One plan-limit breach, naming the offending property and the plan/service
/// the limit came from. Serialized as-is into error responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Dotted path of the offending document property.
    pub property: String,
    /// Human-readable description of the breach.
    pub message: String,
    /// Plan whose limit was exceeded.
    pub plan_id: String,
    /// Service the plan belongs to.
    pub service_id: String,
}

impl Violation {
    pub fn new(property: &str, message: &str, plan_id: &str, service_id: &str) -> Self {
        Self {
            property: property.to_string(),
            message: message.to_string(),
            plan_id: plan_id.to_string(),
            service_id: service_id.to_string(),
        }
    }
}
