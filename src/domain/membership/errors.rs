//! Membership-specific error types.
//!
//! Note that a denied entitlement check is not an error; it is a normal
//! decision outcome. These errors cover the operational failures around
//! the core: missing members, duplicate registration, and storage issues.

use crate::domain::foundation::{DomainError, ErrorCode, UserId};

/// Membership-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MembershipError {
    /// No member record exists for this user.
    NotFound(UserId),

    /// User already has a member record.
    AlreadyRegistered(UserId),

    /// A concurrent writer committed the global stats first.
    StatsConflict { attempts: u32 },

    /// Validation failed.
    ValidationFailed { field: String, message: String },

    /// Infrastructure error.
    Infrastructure(String),
}

impl MembershipError {
    pub fn not_found(user_id: UserId) -> Self {
        MembershipError::NotFound(user_id)
    }

    pub fn already_registered(user_id: UserId) -> Self {
        MembershipError::AlreadyRegistered(user_id)
    }

    pub fn stats_conflict(attempts: u32) -> Self {
        MembershipError::StatsConflict { attempts }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        MembershipError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        MembershipError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            MembershipError::NotFound(_) => ErrorCode::MemberNotFound,
            MembershipError::AlreadyRegistered(_) => ErrorCode::MemberExists,
            MembershipError::StatsConflict { .. } => ErrorCode::VersionConflict,
            MembershipError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            MembershipError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            MembershipError::NotFound(user_id) => {
                format!("No member record found for user: {}", user_id)
            }
            MembershipError::AlreadyRegistered(user_id) => {
                format!("User {} is already registered", user_id)
            }
            MembershipError::StatsConflict { attempts } => format!(
                "Global stats update conflicted with a concurrent writer after {} attempts",
                attempts
            ),
            MembershipError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            MembershipError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }

    /// Returns true if this error should trigger a retry.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            MembershipError::Infrastructure(_) | MembershipError::StatsConflict { .. }
        )
    }
}

impl std::fmt::Display for MembershipError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for MembershipError {}

impl From<DomainError> for MembershipError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::VersionConflict => MembershipError::StatsConflict { attempts: 1 },
            ErrorCode::ValidationFailed | ErrorCode::EmptyField | ErrorCode::InvalidFormat => {
                MembershipError::ValidationFailed {
                    field: err
                        .details
                        .get("field")
                        .cloned()
                        .unwrap_or_else(|| "unknown".to_string()),
                    message: err.message,
                }
            }
            _ => MembershipError::Infrastructure(err.to_string()),
        }
    }
}

impl From<MembershipError> for DomainError {
    fn from(err: MembershipError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}
