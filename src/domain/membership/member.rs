//! Member aggregate entity.
//!
//! A Member is one user's membership record: current tier, usage counters,
//! and permanent membership numbers.
//!
//! # Design Decisions
//!
//! - **One per user**: keyed by user_id in the repository
//! - **Guest lifecycle**: every user starts as a Cultivator-tier guest with
//!   zeroed counters at first app load
//! - **Permanent numbers**: member/master numbers are assigned at most once,
//!   by the registrar, and survive downgrades

use crate::domain::foundation::{MemberId, Timestamp, UserId};
use serde::{Deserialize, Serialize};

use super::{MasterNumber, MemberNumber, Tier, Usage};

/// Member aggregate - one user's membership state.
///
/// # Invariants
///
/// - `member_number` and `master_number` transition only from `None` to
///   `Some` and never change afterwards
/// - `master_number` is only present on members that have held the Master
///   tier at some point
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Unique identifier for this member record.
    pub id: MemberId,

    /// User who owns this membership.
    pub user_id: UserId,

    /// Display name shown in the community views.
    pub display_name: String,

    /// Current subscription tier.
    pub tier: Tier,

    /// Permanent number assigned on first paid upgrade.
    pub member_number: Option<MemberNumber>,

    /// Permanent number assigned on first Master upgrade.
    pub master_number: Option<MasterNumber>,

    /// Resource usage counters.
    pub usage: Usage,

    /// When the member first joined a paid tier.
    pub joined_paid_at: Option<Timestamp>,

    /// When the member first upgraded to Master.
    pub upgraded_to_master_at: Option<Timestamp>,

    /// When the member record was created.
    pub created_at: Timestamp,

    /// When the member record was last updated.
    pub updated_at: Timestamp,
}

impl Member {
    /// Creates a guest member at first app load.
    ///
    /// Guests start on the free Cultivator tier with zeroed counters and
    /// no membership numbers.
    pub fn guest(id: MemberId, user_id: UserId, display_name: impl Into<String>, now: Timestamp) -> Self {
        Self {
            id,
            user_id,
            display_name: display_name.into(),
            tier: Tier::Cultivator,
            member_number: None,
            master_number: None,
            usage: Usage::empty(now),
            joined_paid_at: None,
            upgraded_to_master_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns true if this member has ever held a paid tier.
    pub fn has_member_number(&self) -> bool {
        self.member_number.is_some()
    }

    /// Returns true if this member has ever held the Master tier.
    pub fn has_master_number(&self) -> bool {
        self.master_number.is_some()
    }
}
