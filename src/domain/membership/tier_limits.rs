//! Tier-based resource limits configuration.
//!
//! Defines the maximum resource counts available for each membership tier.

use super::Tier;
use serde::{Deserialize, Serialize};

/// The kinds of resources subject to tier limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    /// Tracked habits.
    Habits,
    /// Open tasks.
    Tasks,
    /// Journal entries.
    JournalEntries,
    /// AI coach requests, limited per UTC day.
    AiRequestsPerDay,
}

impl ResourceKind {
    /// Returns true for counters that reset daily rather than tracking
    /// a live resource count.
    pub fn is_daily(&self) -> bool {
        matches!(self, ResourceKind::AiRequestsPerDay)
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ResourceKind::Habits => "habits",
            ResourceKind::Tasks => "tasks",
            ResourceKind::JournalEntries => "journal_entries",
            ResourceKind::AiRequestsPerDay => "ai_requests_per_day",
        };
        write!(f, "{}", s)
    }
}

/// Resource limits for a membership tier.
///
/// `None` means unlimited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierLimits {
    /// The tier these limits apply to.
    pub tier: Tier,
    /// Maximum tracked habits.
    pub max_habits: Option<u32>,
    /// Maximum open tasks.
    pub max_tasks: Option<u32>,
    /// Maximum journal entries.
    pub max_journal_entries: Option<u32>,
    /// Maximum AI requests per UTC day.
    pub ai_requests_per_day: Option<u32>,
}

impl TierLimits {
    /// Get the limits for a specific tier.
    ///
    /// # Tier Configuration
    ///
    /// | Tier | Habits | Tasks | Journal | AI/day |
    /// |------|--------|-------|---------|--------|
    /// | Cultivator | 5 | 20 | 30 | 10 |
    /// | Daily | Unlimited | Unlimited | Unlimited | 100 |
    /// | Master | Unlimited | Unlimited | Unlimited | Unlimited |
    pub fn for_tier(tier: Tier) -> Self {
        match tier {
            Tier::Cultivator => Self {
                tier,
                max_habits: Some(5),
                max_tasks: Some(20),
                max_journal_entries: Some(30),
                ai_requests_per_day: Some(10),
            },
            Tier::Daily => Self {
                tier,
                max_habits: None,
                max_tasks: None,
                max_journal_entries: None,
                ai_requests_per_day: Some(100),
            },
            Tier::Master => Self {
                tier,
                max_habits: None,
                max_tasks: None,
                max_journal_entries: None,
                ai_requests_per_day: None,
            },
        }
    }

    /// Returns the limit for a resource kind. `None` means unlimited.
    pub fn limit_for(&self, kind: ResourceKind) -> Option<u32> {
        match kind {
            ResourceKind::Habits => self.max_habits,
            ResourceKind::Tasks => self.max_tasks,
            ResourceKind::JournalEntries => self.max_journal_entries,
            ResourceKind::AiRequestsPerDay => self.ai_requests_per_day,
        }
    }
}
