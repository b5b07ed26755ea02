//! Plan catalog loader and limit lookup.
//!
//! The catalog is a static JSON document listing services, their plans, and
//! the numeric limits each plan puts on policy contents. It is loaded once at
//! startup, validated, and shared read-only for the life of the process.

pub mod schema;

use std::fs;

use scalegate_core::error::{Result, ScaleGateError};

pub use schema::{LimitKey, PlanCatalog, PlanEntry, ServiceEntry};

pub fn load_from_file(path: &str) -> Result<PlanCatalog> {
    let s = fs::read_to_string(path)
        .map_err(|e| ScaleGateError::Internal(format!("read catalog failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<PlanCatalog> {
    let catalog: PlanCatalog = serde_json::from_str(s)
        .map_err(|e| ScaleGateError::BadRequest(format!("invalid catalog json: {e}")))?;
    catalog.validate()?;
    Ok(catalog)
}
