use async_trait::async_trait;
use dashmap::DashMap;

use scalegate_core::error::Result;

use super::{BindingStore, StoredBinding};

/// In-memory binding store keyed by binding id.
#[derive(Default)]
pub struct MemoryBindingStore {
    bindings: DashMap<String, StoredBinding>,
}

impl MemoryBindingStore {
    pub fn new() -> Self {
        Self {
            bindings: DashMap::new(),
        }
    }
}

#[async_trait]
impl BindingStore for MemoryBindingStore {
    async fn put(&self, binding: StoredBinding) -> Result<()> {
        self.bindings.insert(binding.binding_id.clone(), binding);
        Ok(())
    }

    async fn get(&self, binding_id: &str) -> Option<StoredBinding> {
        self.bindings.get(binding_id).map(|e| e.value().clone())
    }

    async fn delete(&self, binding_id: &str) -> Result<bool> {
        Ok(self.bindings.remove(binding_id).is_some())
    }

    async fn count(&self) -> usize {
        self.bindings.len()
    }
}
