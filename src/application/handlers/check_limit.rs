//! CheckLimitHandler - Query handler for entitlement checks.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::membership::{check_limit, LimitDecision, MembershipError, ResourceKind};
use crate::ports::MemberRepository;

/// Query to check whether one more resource fits under the member's tier.
#[derive(Debug, Clone)]
pub struct CheckLimitQuery {
    pub user_id: UserId,
    pub kind: ResourceKind,
}

/// Handler for entitlement checks.
///
/// Evaluated synchronously before every resource-creating action and every
/// AI request, so the UI can short-circuit into the upgrade flow. Never
/// mutates anything.
pub struct CheckLimitHandler {
    members: Arc<dyn MemberRepository>,
}

impl CheckLimitHandler {
    pub fn new(members: Arc<dyn MemberRepository>) -> Self {
        Self { members }
    }

    pub async fn handle(&self, query: CheckLimitQuery) -> Result<LimitDecision, MembershipError> {
        let member = self
            .members
            .find_by_user_id(&query.user_id)
            .await?
            .ok_or_else(|| MembershipError::not_found(query.user_id.clone()))?;

        let decision = check_limit(member.tier, &member.usage, query.kind, Timestamp::now());

        debug!(
            user_id = %query.user_id,
            kind = %query.kind,
            allowed = decision.allowed,
            current = decision.current,
            "evaluated tier limit"
        );
        Ok(decision)
    }
}
