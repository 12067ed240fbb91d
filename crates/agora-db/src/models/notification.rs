//! Notification database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the notifications table.
///
/// `dedup_key` carries a unique index; `kind` is stored as its wire name.
#[derive(Debug, Clone, FromRow)]
pub struct NotificationModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub actor_id: Uuid,
    pub actor_username: String,
    pub message: String,
    pub post_id: Option<Uuid>,
    pub comment_id: Option<Uuid>,
    pub kind: String,
    pub created_at: DateTime<Utc>,
    pub is_read: bool,
    pub metadata: serde_json::Value,
}
