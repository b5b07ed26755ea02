//! Policy contracts (document + violation record).
//!
//! This module hosts the two shapes exchanged around plan-limit validation:
//! - the untrusted scaling-policy document submitted with a binding request,
//! - the violation record reported when a plan limit is breached.
//!
//! Parsing is panic-free: malformed input is reported through serde errors at
//! the boundary instead of panicking, keeping the broker resilient to hostile
//! payloads.

pub mod document;
pub mod violation;

pub use document::{ScalingPolicy, Schedules};
pub use violation::Violation;
