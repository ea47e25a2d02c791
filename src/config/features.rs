//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Seed the stats store with the launch-era community totals instead of
    /// an empty state.
    #[serde(default = "default_seed_launch_stats")]
    pub seed_launch_stats: bool,

    /// Enable request tracing
    #[serde(default = "default_enable_tracing")]
    pub enable_tracing: bool,
}

fn default_seed_launch_stats() -> bool {
    true
}

fn default_enable_tracing() -> bool {
    true
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            seed_launch_stats: default_seed_launch_stats(),
            enable_tracing: default_enable_tracing(),
        }
    }
}
