//! Shared application state for the scalegate broker.

use std::sync::Arc;

use scalegate_core::error::{Result, ScaleGateError};

use crate::catalog::{LimitKey, PlanCatalog};
use crate::config::BrokerConfig;
use crate::obs::metrics::BrokerMetrics;
use crate::store::{BindingStore, MemoryBindingStore};

const FAIL_FAST_ON_MISSING_LIMITS: bool = false; // if changed to true, boot fails.

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: BrokerConfig,
    catalog: PlanCatalog,
    store: Arc<dyn BindingStore>,
    metrics: BrokerMetrics,
}

impl AppState {
    /// Build application state from loaded config and catalog.
    ///
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn new(cfg: BrokerConfig, catalog: PlanCatalog) -> Result<Self> {
        // catalog <-> limit-key sanity check: a plan without a limit key is
        // unbounded for that field, which is usually a config mistake.
        for service in &catalog.services {
            for plan in &service.plans {
                for key in LimitKey::ALL {
                    if plan.limit(key).is_none() {
                        tracing::warn!(
                            service = %service.id,
                            plan = %plan.id,
                            key = key.as_str(),
                            "plan does not configure a limit, treated as unbounded"
                        );
                        if FAIL_FAST_ON_MISSING_LIMITS {
                            return Err(ScaleGateError::BadRequest(format!(
                                "plan {} of service {} does not configure {}",
                                plan.id,
                                service.id,
                                key.as_str()
                            )));
                        }
                    }
                }
            }
        }

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                catalog,
                store: Arc::new(MemoryBindingStore::new()),
                metrics: BrokerMetrics::default(),
            }),
        })
    }

    pub fn cfg(&self) -> &BrokerConfig {
        &self.inner.cfg
    }

    pub fn catalog(&self) -> &PlanCatalog {
        &self.inner.catalog
    }

    pub fn store(&self) -> &dyn BindingStore {
        self.inner.store.as_ref()
    }

    pub fn metrics(&self) -> &BrokerMetrics {
        &self.inner.metrics
    }

    pub fn is_draining(&self) -> bool {
        self.inner.metrics.is_draining()
    }

    /// Extra gauge lines appended to the `/metrics` payload.
    pub async fn metrics_extra(&self) -> Vec<(&'static str, u64)> {
        vec![("scalegate_bindings_stored", self.store().count().await as u64)]
    }
}
