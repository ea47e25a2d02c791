//! Membership tier definitions.
//!
//! Represents the subscription tier levels available in Daily Cultivator.

use serde::{Deserialize, Serialize};

/// Membership subscription tier.
///
/// Determines resource limits and daily AI quota.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Free tier - limited resources, good for getting started.
    /// - 5 habits, 20 tasks, 30 journal entries
    /// - 10 AI requests per day
    Cultivator,

    /// Paid monthly tier.
    /// - Unlimited habits, tasks, and journal entries
    /// - 100 AI requests per day
    Daily,

    /// Top tier - everything unlimited, includes a donation per upgrade.
    Master,
}

impl Tier {
    /// Returns true if this tier is a paid tier.
    pub fn is_paid(&self) -> bool {
        !matches!(self, Tier::Cultivator)
    }

    /// Returns the display name for this tier.
    pub fn display_name(&self) -> &'static str {
        match self {
            Tier::Cultivator => "Cultivator",
            Tier::Daily => "Daily Cultivator",
            Tier::Master => "Master Cultivator",
        }
    }

    /// Returns the numeric rank of this tier for comparison.
    ///
    /// Higher rank = more features.
    pub fn rank(&self) -> u8 {
        match self {
            Tier::Cultivator => 0,
            Tier::Daily => 1,
            Tier::Master => 2,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
