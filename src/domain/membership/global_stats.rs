//! Global membership aggregate counters.
//!
//! Process-wide totals displayed on the community and admin dashboards,
//! plus the monotonic sequence cursors the registrar draws membership
//! numbers from.

use crate::domain::foundation::Timestamp;
use serde::{Deserialize, Serialize};

use super::{MasterNumber, MemberNumber, Tier};

/// Aggregate membership statistics.
///
/// # Invariants
///
/// - `next_member_number` and `next_master_number` strictly increase and
///   values are never reused, even across downgrades
/// - `total_members` only increases; there is no removal path
///
/// Owned exclusively by the registrar's unit of work. Readers get copies
/// via [`crate::ports::GlobalStatsStore::snapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalStats {
    /// Members who have ever joined a paid tier.
    pub total_members: u64,

    /// Members currently on the Daily tier.
    pub active_daily_cultivators: u64,

    /// Members currently on the Master tier.
    pub active_master_cultivators: u64,

    /// Accumulated donations in cents.
    pub total_donated_cents: u64,

    /// Next unassigned member number.
    pub next_member_number: u64,

    /// Next unassigned master number.
    pub next_master_number: u64,

    /// When any aggregate last changed.
    pub last_updated: Timestamp,
}

impl GlobalStats {
    /// Zero state for a fresh deployment. Number sequences start at 1.
    pub fn new(now: Timestamp) -> Self {
        Self {
            total_members: 0,
            active_daily_cultivators: 0,
            active_master_cultivators: 0,
            total_donated_cents: 0,
            next_member_number: 1,
            next_master_number: 1,
            last_updated: now,
        }
    }

    /// Seeded launch data carried over from the original deployment.
    pub fn launch_baseline(now: Timestamp) -> Self {
        Self {
            total_members: 4892,
            active_daily_cultivators: 4765,
            active_master_cultivators: 127,
            total_donated_cents: 1_234_100,
            next_member_number: 4893,
            next_master_number: 128,
            last_updated: now,
        }
    }

    /// Draws the next member number, advancing the cursor and counting the
    /// new member into the paid totals.
    ///
    /// New paid members enter the Daily active bucket; a Master upgrade in
    /// the same unit of work moves them via [`GlobalStats::issue_master_number`].
    pub fn issue_member_number(&mut self) -> MemberNumber {
        let assigned = MemberNumber::new(self.next_member_number);
        self.next_member_number += 1;
        self.total_members += 1;
        self.active_daily_cultivators += 1;
        assigned
    }

    /// Draws the next master number, advancing the cursor and moving the
    /// member between active buckets.
    ///
    /// `previous_tier` decides whether a Daily slot is vacated. The donation
    /// is accumulated by the registrar, which knows the configured amount.
    pub fn issue_master_number(&mut self, previous_tier: Tier) -> MasterNumber {
        let assigned = MasterNumber::new(self.next_master_number);
        self.next_master_number += 1;
        self.active_master_cultivators += 1;
        if previous_tier == Tier::Daily {
            self.active_daily_cultivators = self.active_daily_cultivators.saturating_sub(1);
        }
        assigned
    }

    /// Adds a donation to the running total.
    pub fn record_donation(&mut self, amount_cents: u64) {
        self.total_donated_cents += amount_cents;
    }

    /// Refreshes the last-updated marker.
    pub fn touch(&mut self, now: Timestamp) {
        self.last_updated = now;
    }
}
