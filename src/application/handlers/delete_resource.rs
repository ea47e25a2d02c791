//! DeleteResourceHandler - Command handler for recording resource deletion.

use std::sync::Arc;

use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::membership::{Member, MembershipError, ResourceKind};
use crate::ports::MemberRepository;

/// Command to record deletion of a habit, task, or journal entry.
#[derive(Debug, Clone)]
pub struct DeleteResourceCommand {
    pub user_id: UserId,
    pub kind: ResourceKind,
}

/// Handler that decrements the member's usage counter, floored at zero.
///
/// Deletions are never limit-checked; freeing capacity is always allowed.
pub struct DeleteResourceHandler {
    members: Arc<dyn MemberRepository>,
}

impl DeleteResourceHandler {
    pub fn new(members: Arc<dyn MemberRepository>) -> Self {
        Self { members }
    }

    pub async fn handle(&self, cmd: DeleteResourceCommand) -> Result<Member, MembershipError> {
        if cmd.kind.is_daily() {
            return Err(MembershipError::validation(
                "resource_kind",
                "the daily AI quota cannot be handed back",
            ));
        }

        let mut member = self
            .members
            .find_by_user_id(&cmd.user_id)
            .await?
            .ok_or_else(|| MembershipError::not_found(cmd.user_id.clone()))?;

        member.usage.record_deleted(cmd.kind);
        member.updated_at = Timestamp::now();
        self.members.update(&member).await?;

        Ok(member)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryMemberStore;
    use crate::domain::foundation::MemberId;

    fn guest(user: &str) -> Member {
        Member::guest(
            MemberId::new(),
            UserId::new(user).unwrap(),
            "Guest",
            Timestamp::now(),
        )
    }

    #[tokio::test]
    async fn deletion_decrements_counter() {
        let mut member = guest("user-1");
        member.usage.record_created(ResourceKind::Tasks);
        member.usage.record_created(ResourceKind::Tasks);

        let store = Arc::new(InMemoryMemberStore::new());
        store.save(&member).await.unwrap();
        let handler = DeleteResourceHandler::new(store);

        let updated = handler
            .handle(DeleteResourceCommand {
                user_id: member.user_id.clone(),
                kind: ResourceKind::Tasks,
            })
            .await
            .unwrap();

        assert_eq!(updated.usage.tasks_count, 1);
    }

    #[tokio::test]
    async fn deletion_floors_at_zero() {
        let member = guest("user-1");
        let store = Arc::new(InMemoryMemberStore::new());
        store.save(&member).await.unwrap();
        let handler = DeleteResourceHandler::new(store);

        let updated = handler
            .handle(DeleteResourceCommand {
                user_id: member.user_id.clone(),
                kind: ResourceKind::JournalEntries,
            })
            .await
            .unwrap();

        assert_eq!(updated.usage.journal_entries_count, 0);
    }

    #[tokio::test]
    async fn rejects_ai_quota_kind() {
        let member = guest("user-1");
        let store = Arc::new(InMemoryMemberStore::new());
        store.save(&member).await.unwrap();
        let handler = DeleteResourceHandler::new(store);

        let result = handler
            .handle(DeleteResourceCommand {
                user_id: member.user_id.clone(),
                kind: ResourceKind::AiRequestsPerDay,
            })
            .await;

        assert!(matches!(result, Err(MembershipError::ValidationFailed { .. })));
    }

    #[tokio::test]
    async fn fails_for_unknown_user() {
        let handler = DeleteResourceHandler::new(Arc::new(InMemoryMemberStore::new()));

        let result = handler
            .handle(DeleteResourceCommand {
                user_id: UserId::new("nobody").unwrap(),
                kind: ResourceKind::Tasks,
            })
            .await;

        assert!(matches!(result, Err(MembershipError::NotFound(_))));
    }
}
