//! Notification entity - a durable record produced by the event dispatcher

use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

/// Notification category, stored as its SCREAMING_SNAKE_CASE wire name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    NewPost,
    PostUpdate,
    Comment,
    Report,
    PostLike,
    CommentLike,
    System,
}

impl NotificationKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NewPost => "NEW_POST",
            Self::PostUpdate => "POST_UPDATE",
            Self::Comment => "COMMENT",
            Self::Report => "REPORT",
            Self::PostLike => "POST_LIKE",
            Self::CommentLike => "COMMENT_LIKE",
            Self::System => "SYSTEM",
        }
    }

    /// Parse from the stored wire name
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "NEW_POST" => Some(Self::NewPost),
            "POST_UPDATE" => Some(Self::PostUpdate),
            "COMMENT" => Some(Self::Comment),
            "REPORT" => Some(Self::Report),
            "POST_LIKE" => Some(Self::PostLike),
            "COMMENT_LIKE" => Some(Self::CommentLike),
            "SYSTEM" => Some(Self::System),
            _ => None,
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Notification entity
///
/// Created only by the dispatcher in response to a domain event. Read-state
/// toggles happen outside the core; rows are never deleted here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: Uuid,
    /// Recipient
    pub user_id: Uuid,
    pub actor_id: Uuid,
    pub actor_username: String,
    pub message: String,
    pub post_id: Option<Uuid>,
    pub comment_id: Option<Uuid>,
    pub kind: NotificationKind,
    pub created_at: DateTime<Utc>,
    pub is_read: bool,
    pub metadata: Value,
}

impl Notification {
    /// Create an unread notification with a fresh id
    pub fn new(
        kind: NotificationKind,
        user_id: Uuid,
        actor_id: Uuid,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            actor_id,
            actor_username: String::new(),
            message: message.into(),
            post_id: None,
            comment_id: None,
            kind,
            created_at: Utc::now(),
            is_read: false,
            metadata: Value::Null,
        }
    }

    pub fn with_post(mut self, post_id: Uuid) -> Self {
        self.post_id = Some(post_id);
        self
    }

    pub fn with_comment(mut self, comment_id: Uuid) -> Self {
        self.comment_id = Some(comment_id);
        self
    }

    pub fn with_actor_username(mut self, username: impl Into<String>) -> Self {
        self.actor_username = username.into();
        self
    }

    pub fn with_metadata(mut self, metadata: Value) -> Self {
        self.metadata = metadata;
        self
    }

    /// Deterministic deduplication key.
    ///
    /// Replayed events with identical content produce the same key, and a
    /// unique index on it turns redelivery into a no-op insert.
    pub fn dedup_key(&self) -> String {
        let post = self
            .post_id
            .map_or_else(|| "-".to_string(), |id| id.to_string());
        let comment = self
            .comment_id
            .map_or_else(|| "-".to_string(), |id| id.to_string());
        format!(
            "{}:{}:{}:{}:{}",
            self.kind, self.user_id, self.actor_id, post, comment
        )
    }
}
