//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Post not found: {0}")]
    PostNotFound(Uuid),

    #[error("Comment not found: {0}")]
    CommentNotFound(Uuid),

    #[error("Poll not found: {0}")]
    PollNotFound(Uuid),

    #[error("Poll option not found: {0}")]
    PollOptionNotFound(Uuid),

    #[error("User not found: {0}")]
    UserNotFound(Uuid),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    Validation(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("User already voted for a different option in poll {poll_id}")]
    AlreadyVoted { poll_id: Uuid },

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Poll {0} is closed")]
    PollClosed(Uuid),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Bus error: {0}")]
    BusError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::PostNotFound(_) => "UNKNOWN_POST",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::PollNotFound(_) => "UNKNOWN_POLL",
            Self::PollOptionNotFound(_) => "UNKNOWN_POLL_OPTION",
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::AlreadyVoted { .. } => "ALREADY_VOTED",
            Self::PollClosed(_) => "POLL_CLOSED",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::BusError(_) => "BUS_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::PostNotFound(_)
                | Self::CommentNotFound(_)
                | Self::PollNotFound(_)
                | Self::PollOptionNotFound(_)
                | Self::UserNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::AlreadyVoted { .. } | Self::PollClosed(_))
    }

    /// Check if the caller may retry the operation unchanged.
    ///
    /// The core never retries internally; this flags connectivity-class
    /// failures for callers that want to.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::DatabaseError(_) | Self::BusError(_))
    }
}
