//! Binding persistence behind the validation step.
//!
//! The broker owns validation only; what happens to an accepted binding is a
//! downstream concern. `BindingStore` is the seam: real deployments implement
//! it over their policy database, while the built-in memory store keeps the
//! broker self-contained for development and tests.

pub mod memory;

use async_trait::async_trait;

use scalegate_core::error::Result;

pub use memory::MemoryBindingStore;

/// A binding accepted by validation, as handed to the persistence stage.
#[derive(Debug, Clone)]
pub struct StoredBinding {
    pub binding_id: String,
    pub instance_id: String,
    pub app_guid: Option<String>,
    pub service_id: String,
    pub plan_id: String,
    /// Raw policy JSON, stored verbatim (the broker never rewrites it).
    pub policy_json: Option<String>,
}

/// Downstream stage for accepted bindings.
#[async_trait]
pub trait BindingStore: Send + Sync {
    async fn put(&self, binding: StoredBinding) -> Result<()>;
    async fn get(&self, binding_id: &str) -> Option<StoredBinding>;
    /// Remove a binding; `false` when it was never stored.
    async fn delete(&self, binding_id: &str) -> Result<bool>;
    async fn count(&self) -> usize;
}
