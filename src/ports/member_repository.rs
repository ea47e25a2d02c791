//! Member repository port.
//!
//! Defines the contract for loading and persisting member records. The UI's
//! client-side storage layer owns the actual persistence; this crate ships
//! an in-memory implementation for embedding and testing.

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::membership::Member;
use async_trait::async_trait;

/// Repository port for member records.
///
/// One record per user. Implementations must be safe to share across tasks.
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Persist a new member record.
    ///
    /// Fails if a record already exists for the member's user.
    async fn save(&self, member: &Member) -> Result<(), DomainError>;

    /// Persist changes to an existing member record.
    async fn update(&self, member: &Member) -> Result<(), DomainError>;

    /// Find the member record for a user.
    ///
    /// Returns `None` if the user has never been registered.
    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Option<Member>, DomainError>;
}
