//! GetMemberHandler - Query handler for a member's profile view.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::membership::{
    MasterNumber, MemberNumber, MembershipError, ResourceKind, Tier, TierLimits,
};
use crate::ports::MemberRepository;

/// Query for one member's profile.
#[derive(Debug, Clone)]
pub struct GetMemberQuery {
    pub user_id: UserId,
}

/// Read model for the profile and settings screens.
///
/// Pairs the member's current state with the limits table of their tier so
/// the UI can render usage meters without a second lookup.
#[derive(Debug, Clone, Serialize)]
pub struct MemberView {
    pub user_id: UserId,
    pub display_name: String,
    pub tier: Tier,
    pub tier_name: String,
    pub member_number: Option<MemberNumber>,
    pub master_number: Option<MasterNumber>,
    pub habits_count: u32,
    pub tasks_count: u32,
    pub journal_entries_count: u32,
    pub ai_requests_today: u32,
    pub limits: TierLimits,
    pub joined_paid_at: Option<Timestamp>,
    pub upgraded_to_master_at: Option<Timestamp>,
}

/// Handler for the member profile query.
pub struct GetMemberHandler {
    members: Arc<dyn MemberRepository>,
}

impl GetMemberHandler {
    pub fn new(members: Arc<dyn MemberRepository>) -> Self {
        Self { members }
    }

    pub async fn handle(&self, query: GetMemberQuery) -> Result<MemberView, MembershipError> {
        let member = self
            .members
            .find_by_user_id(&query.user_id)
            .await?
            .ok_or_else(|| MembershipError::not_found(query.user_id.clone()))?;

        let now = Timestamp::now();
        Ok(MemberView {
            user_id: member.user_id,
            display_name: member.display_name,
            tier: member.tier,
            tier_name: member.tier.display_name().to_string(),
            member_number: member.member_number,
            master_number: member.master_number,
            habits_count: member.usage.habits_count,
            tasks_count: member.usage.tasks_count,
            journal_entries_count: member.usage.journal_entries_count,
            ai_requests_today: member
                .usage
                .count_for(ResourceKind::AiRequestsPerDay, now),
            limits: TierLimits::for_tier(member.tier),
            joined_paid_at: member.joined_paid_at,
            upgraded_to_master_at: member.upgraded_to_master_at,
        })
    }
}
