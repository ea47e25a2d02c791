//! In-memory member store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::membership::Member;
use crate::ports::MemberRepository;

/// In-memory implementation of the `MemberRepository` port.
///
/// Thread-safe via internal `Mutex`. Does not persist data across restarts.
#[derive(Default)]
pub struct InMemoryMemberStore {
    members: Mutex<HashMap<UserId, Member>>,
}

impl InMemoryMemberStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored members.
    pub fn len(&self) -> usize {
        self.members.lock().unwrap().len()
    }

    /// Returns true if no members are stored.
    pub fn is_empty(&self) -> bool {
        self.members.lock().unwrap().is_empty()
    }
}

#[async_trait]
impl MemberRepository for InMemoryMemberStore {
    async fn save(&self, member: &Member) -> Result<(), DomainError> {
        let mut members = self.members.lock().unwrap();
        if members.contains_key(&member.user_id) {
            return Err(DomainError::new(
                ErrorCode::MemberExists,
                format!("Member already exists for user {}", member.user_id),
            ));
        }
        members.insert(member.user_id.clone(), member.clone());
        Ok(())
    }

    async fn update(&self, member: &Member) -> Result<(), DomainError> {
        let mut members = self.members.lock().unwrap();
        if !members.contains_key(&member.user_id) {
            return Err(DomainError::new(
                ErrorCode::MemberNotFound,
                format!("No member record for user {}", member.user_id),
            ));
        }
        members.insert(member.user_id.clone(), member.clone());
        Ok(())
    }

    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Option<Member>, DomainError> {
        Ok(self.members.lock().unwrap().get(user_id).cloned())
    }
}
