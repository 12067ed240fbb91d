//! Reaction database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the reactions table.
///
/// Exactly one of `post_id`/`comment_id` is non-null, enforced by a CHECK
/// constraint; the partial unique indexes on `(user_id, post_id)` and
/// `(user_id, comment_id)` are what make concurrent inserts race safely.
#[derive(Debug, Clone, FromRow)]
pub struct ReactionModel {
    pub id: Uuid,
    pub post_id: Option<Uuid>,
    pub comment_id: Option<Uuid>,
    pub user_id: Uuid,
    pub is_like: bool,
    pub created_at: DateTime<Utc>,
}
