//! Membership domain - tiers, entitlement limits, and member numbering.

mod entitlement;
mod errors;
mod events;
mod global_stats;
mod member;
mod member_number;
mod registrar;
mod tier;
mod tier_limits;
mod usage;

pub use entitlement::{check_limit, LimitDecision};
pub use errors::MembershipError;
pub use events::MembershipEvent;
pub use global_stats::GlobalStats;
pub use member::Member;
pub use member_number::{MasterNumber, MemberNumber};
pub use registrar::{Registrar, UpgradeOutcome};
pub use tier::Tier;
pub use tier_limits::{ResourceKind, TierLimits};
pub use usage::Usage;
