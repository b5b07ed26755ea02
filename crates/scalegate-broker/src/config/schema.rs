use serde::Deserialize;

use scalegate_core::error::{Result, ScaleGateError};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BrokerConfig {
    pub version: u32,

    #[serde(default)]
    pub broker: BrokerSection,
}

impl BrokerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(ScaleGateError::UnsupportedVersion);
        }

        self.broker.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BrokerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Path of the plan catalog document, loaded once at startup.
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,

    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for BrokerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            catalog_path: default_catalog_path(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl BrokerSection {
    pub fn validate(&self) -> Result<()> {
        if !(1024..=4_194_304).contains(&self.max_body_bytes) {
            return Err(ScaleGateError::BadRequest(
                "broker.max_body_bytes must be between 1024 and 4194304".into(),
            ));
        }
        if self.catalog_path.is_empty() {
            return Err(ScaleGateError::BadRequest(
                "broker.catalog_path must not be empty".into(),
            ));
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_catalog_path() -> String {
    "catalog.json".into()
}
fn default_max_body_bytes() -> usize {
    262_144
}
