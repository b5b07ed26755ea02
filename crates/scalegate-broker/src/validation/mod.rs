//! Validation layer (plan limits).
//!
//! Compares submitted policy documents against the plan catalog ahead of
//! persistence and produces violation records for the API layer to surface.

pub mod limits;
pub mod step;

pub use limits::validate_policy;
pub use step::{BindingIdentity, StepOutcome};
