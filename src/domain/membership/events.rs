//! Membership domain events.
//!
//! Events emitted during registrar transactions, used for audit logging and
//! for driving welcome notifications. Named in past tense: something that
//! has already happened.

use crate::domain::foundation::{Timestamp, UserId};
use serde::{Deserialize, Serialize};

use super::{MasterNumber, MemberNumber, Tier};

/// Events that occur during membership changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MembershipEvent {
    /// A permanent member number was assigned on first paid upgrade.
    MemberNumberAssigned {
        user_id: UserId,
        number: MemberNumber,
        occurred_at: Timestamp,
    },

    /// A permanent master number was assigned on first Master upgrade.
    ///
    /// Carries the donation made as part of the upgrade.
    MasterNumberAssigned {
        user_id: UserId,
        number: MasterNumber,
        donation_cents: u64,
        occurred_at: Timestamp,
    },

    /// The member's tier changed (upgrade or downgrade).
    TierChanged {
        user_id: UserId,
        previous_tier: Tier,
        new_tier: Tier,
        occurred_at: Timestamp,
    },
}

impl MembershipEvent {
    /// Returns the event type string for routing and filtering.
    pub fn event_type(&self) -> &'static str {
        match self {
            MembershipEvent::MemberNumberAssigned { .. } => "membership.member_number_assigned",
            MembershipEvent::MasterNumberAssigned { .. } => "membership.master_number_assigned",
            MembershipEvent::TierChanged { .. } => "membership.tier_changed",
        }
    }

    /// Returns the user ID associated with this event.
    pub fn user_id(&self) -> &UserId {
        match self {
            MembershipEvent::MemberNumberAssigned { user_id, .. }
            | MembershipEvent::MasterNumberAssigned { user_id, .. }
            | MembershipEvent::TierChanged { user_id, .. } => user_id,
        }
    }

    /// Returns when this event occurred.
    pub fn occurred_at(&self) -> Timestamp {
        match self {
            MembershipEvent::MemberNumberAssigned { occurred_at, .. }
            | MembershipEvent::MasterNumberAssigned { occurred_at, .. }
            | MembershipEvent::TierChanged { occurred_at, .. } => *occurred_at,
        }
    }
}
