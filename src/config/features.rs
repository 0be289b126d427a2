//! Feature flags configuration

use serde::Deserialize;

use crate::domain::pricing::EngineOptions;

/// Deployment-time switches for pricing behaviour
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Apply promotional annual overrides from the catalog
    #[serde(default)]
    pub promotional_pricing: bool,

    /// Scale the mailbox allotment with the user count
    #[serde(default = "default_dynamic_mailbox_count")]
    pub dynamic_mailbox_count: bool,
}

fn default_dynamic_mailbox_count() -> bool {
    true
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            promotional_pricing: false,
            dynamic_mailbox_count: default_dynamic_mailbox_count(),
        }
    }
}

impl FeatureFlags {
    /// Engine options derived from the flags
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            dynamic_mailbox_count: self.dynamic_mailbox_count,
        }
    }
}
