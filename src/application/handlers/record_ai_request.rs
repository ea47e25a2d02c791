//! RecordAiRequestHandler - Command handler for the daily AI request quota.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::membership::{check_limit, LimitDecision, MembershipError, ResourceKind};
use crate::ports::MemberRepository;

/// Command to consume one unit of the member's daily AI quota.
#[derive(Debug, Clone)]
pub struct RecordAiRequestCommand {
    pub user_id: UserId,
}

/// Result of an AI request attempt.
///
/// When denied, nothing was recorded; the quota reopens at the next UTC day.
#[derive(Debug, Clone)]
pub struct RecordAiRequestResult {
    pub decision: LimitDecision,
}

/// Handler that checks the daily AI limit and, when allowed, records one
/// request. The daily window resets implicitly: the first request on a new
/// UTC day zeroes the counter before incrementing it.
pub struct RecordAiRequestHandler {
    members: Arc<dyn MemberRepository>,
}

impl RecordAiRequestHandler {
    pub fn new(members: Arc<dyn MemberRepository>) -> Self {
        Self { members }
    }

    pub async fn handle(
        &self,
        cmd: RecordAiRequestCommand,
    ) -> Result<RecordAiRequestResult, MembershipError> {
        let mut member = self
            .members
            .find_by_user_id(&cmd.user_id)
            .await?
            .ok_or_else(|| MembershipError::not_found(cmd.user_id.clone()))?;

        let now = Timestamp::now();
        let decision = check_limit(member.tier, &member.usage, ResourceKind::AiRequestsPerDay, now);
        if !decision.allowed {
            debug!(user_id = %cmd.user_id, current = decision.current, "daily AI quota exhausted");
            return Ok(RecordAiRequestResult { decision });
        }

        member.usage.record_ai_request(now);
        member.updated_at = now;
        self.members.update(&member).await?;

        Ok(RecordAiRequestResult { decision })
    }
}
