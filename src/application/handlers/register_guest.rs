//! RegisterGuestHandler - Command handler for creating the guest member at
//! first app load.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{MemberId, Timestamp, UserId};
use crate::domain::membership::{Member, MembershipError};
use crate::ports::MemberRepository;

/// Command to register a new guest member.
#[derive(Debug, Clone)]
pub struct RegisterGuestCommand {
    pub user_id: UserId,
    pub display_name: String,
}

/// Handler for guest registration.
///
/// Every user gets exactly one member record, created on the Cultivator
/// tier with zeroed usage counters.
pub struct RegisterGuestHandler {
    members: Arc<dyn MemberRepository>,
}

impl RegisterGuestHandler {
    pub fn new(members: Arc<dyn MemberRepository>) -> Self {
        Self { members }
    }

    pub async fn handle(&self, cmd: RegisterGuestCommand) -> Result<Member, MembershipError> {
        if cmd.display_name.trim().is_empty() {
            return Err(MembershipError::validation(
                "display_name",
                "cannot be empty",
            ));
        }

        if self.members.find_by_user_id(&cmd.user_id).await?.is_some() {
            return Err(MembershipError::already_registered(cmd.user_id));
        }

        let member = Member::guest(
            MemberId::new(),
            cmd.user_id,
            cmd.display_name,
            Timestamp::now(),
        );
        self.members.save(&member).await?;

        info!(user_id = %member.user_id, "registered guest member");
        Ok(member)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryMemberStore;
    use crate::domain::membership::Tier;

    fn handler() -> RegisterGuestHandler {
        RegisterGuestHandler::new(Arc::new(InMemoryMemberStore::new()))
    }

    fn cmd(user: &str) -> RegisterGuestCommand {
        RegisterGuestCommand {
            user_id: UserId::new(user).unwrap(),
            display_name: "Guest Cultivator".to_string(),
        }
    }

    #[tokio::test]
    async fn registers_guest_on_cultivator_tier() {
        let handler = handler();

        let member = handler.handle(cmd("user-1")).await.unwrap();

        assert_eq!(member.tier, Tier::Cultivator);
        assert!(member.member_number.is_none());
        assert_eq!(member.usage.habits_count, 0);
    }

    #[tokio::test]
    async fn rejects_duplicate_registration() {
        let handler = handler();
        handler.handle(cmd("user-1")).await.unwrap();

        let result = handler.handle(cmd("user-1")).await;

        assert!(matches!(result, Err(MembershipError::AlreadyRegistered(_))));
    }

    #[tokio::test]
    async fn rejects_blank_display_name() {
        let handler = handler();
        let result = handler
            .handle(RegisterGuestCommand {
                user_id: UserId::new("user-1").unwrap(),
                display_name: "   ".to_string(),
            })
            .await;

        assert!(matches!(
            result,
            Err(MembershipError::ValidationFailed { ref field, .. }) if field == "display_name"
        ));
    }

    #[tokio::test]
    async fn different_users_register_independently() {
        let handler = handler();

        let first = handler.handle(cmd("user-1")).await.unwrap();
        let second = handler.handle(cmd("user-2")).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_ne!(first.user_id, second.user_id);
    }
}
