//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Create poll request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePollRequest {
    pub post_id: Uuid,

    #[validate(length(min = 1, max = 500, message = "Question must be 1-500 characters"))]
    pub question: String,

    #[validate(length(min = 2, max = 10, message = "A poll needs 2-10 options"))]
    pub options: Vec<String>,

    /// When the poll stops accepting votes
    pub expires_at: DateTime<Utc>,
}
