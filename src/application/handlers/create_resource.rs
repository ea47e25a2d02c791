//! CreateResourceHandler - Command handler for recording resource creation.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::membership::{check_limit, LimitDecision, MembershipError, ResourceKind};
use crate::ports::MemberRepository;

/// Command to record creation of a habit, task, or journal entry.
#[derive(Debug, Clone)]
pub struct CreateResourceCommand {
    pub user_id: UserId,
    pub kind: ResourceKind,
}

/// Result of a creation attempt.
///
/// A denied decision is a normal outcome: nothing was recorded and the UI
/// should direct the user to the upgrade flow.
#[derive(Debug, Clone)]
pub struct CreateResourceResult {
    pub decision: LimitDecision,
}

/// Handler that checks the tier limit and, when allowed, increments the
/// member's usage counter as one unit of work.
pub struct CreateResourceHandler {
    members: Arc<dyn MemberRepository>,
}

impl CreateResourceHandler {
    pub fn new(members: Arc<dyn MemberRepository>) -> Self {
        Self { members }
    }

    pub async fn handle(
        &self,
        cmd: CreateResourceCommand,
    ) -> Result<CreateResourceResult, MembershipError> {
        if cmd.kind.is_daily() {
            return Err(MembershipError::validation(
                "resource_kind",
                "the daily AI quota is recorded via RecordAiRequestHandler",
            ));
        }

        let mut member = self
            .members
            .find_by_user_id(&cmd.user_id)
            .await?
            .ok_or_else(|| MembershipError::not_found(cmd.user_id.clone()))?;

        let now = Timestamp::now();
        let decision = check_limit(member.tier, &member.usage, cmd.kind, now);
        if !decision.allowed {
            debug!(user_id = %cmd.user_id, kind = %cmd.kind, "resource creation denied by tier limit");
            return Ok(CreateResourceResult { decision });
        }

        member.usage.record_created(cmd.kind);
        member.updated_at = now;
        self.members.update(&member).await?;

        Ok(CreateResourceResult { decision })
    }
}
