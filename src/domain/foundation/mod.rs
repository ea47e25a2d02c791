//! Shared value objects and error types used across the domain.

mod errors;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{MemberId, UserId};
pub use timestamp::Timestamp;
