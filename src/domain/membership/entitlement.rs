//! Entitlement evaluator.
//!
//! Pure decision function consulted before every resource-creating action
//! and every AI request. It never mutates anything: callers apply the
//! counter change themselves after an allowed decision, which keeps the
//! evaluation free of ordering hazards.

use crate::domain::foundation::Timestamp;
use serde::{Deserialize, Serialize};

use super::{ResourceKind, Tier, TierLimits, Usage};

/// Outcome of an entitlement check.
///
/// A denied decision is a normal outcome, not an error: the UI redirects
/// the user to the upgrade flow instead of performing the action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitDecision {
    /// Whether the requested action is permitted.
    pub allowed: bool,
    /// Effective current count for the resource kind.
    pub current: u32,
    /// The tier's limit; `None` means unlimited.
    pub max: Option<u32>,
}

/// Evaluates whether one more resource of `kind` fits under the tier limit.
///
/// Unlimited kinds always allow; `current` is still reported for display.
/// Finite limits allow strictly below the limit: `current == max` denies.
pub fn check_limit(tier: Tier, usage: &Usage, kind: ResourceKind, now: Timestamp) -> LimitDecision {
    let max = TierLimits::for_tier(tier).limit_for(kind);
    let current = usage.count_for(kind, now);
    let allowed = match max {
        None => true,
        Some(max) => current < max,
    };

    LimitDecision { allowed, current, max }
}
