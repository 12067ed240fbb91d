//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Reaction counts for one content target
#[derive(Debug, Clone, Serialize)]
pub struct ReactionCountResponse {
    pub likes: i32,
    pub dislikes: i32,
    /// The requesting user's reaction, if any (`true` = like)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_reaction: Option<bool>,
}

/// Poll option response
#[derive(Debug, Clone, Serialize)]
pub struct PollOptionResponse {
    pub id: Uuid,
    pub text: String,
    pub position: i32,
    pub votes_count: i32,
}

/// Poll response with options and the caller's vote
#[derive(Debug, Clone, Serialize)]
pub struct PollResponse {
    pub id: Uuid,
    pub post_id: Uuid,
    pub question: String,
    pub expires_at: DateTime<Utc>,
    pub is_open: bool,
    /// Counted from vote rows, not summed option counters
    pub total_votes: i64,
    pub options: Vec<PollOptionResponse>,
    /// Option the requesting user voted for, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_vote: Option<Uuid>,
}

/// Notification response
#[derive(Debug, Clone, Serialize)]
pub struct NotificationResponse {
    pub id: Uuid,
    pub actor_id: Uuid,
    pub actor_username: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_id: Option<Uuid>,
    pub kind: &'static str,
    pub created_at: DateTime<Utc>,
    pub is_read: bool,
    #[serde(skip_serializing_if = "serde_json::Value::is_null")]
    pub metadata: serde_json::Value,
}

/// One page of a user's notification feed
#[derive(Debug, Clone, Serialize)]
pub struct NotificationPageResponse {
    pub data: Vec<NotificationResponse>,
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub has_more: bool,
}
