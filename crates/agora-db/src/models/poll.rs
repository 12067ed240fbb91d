//! Poll database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the polls table
#[derive(Debug, Clone, FromRow)]
pub struct PollModel {
    pub id: Uuid,
    pub post_id: Uuid,
    pub question: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Database model for the poll_options table
#[derive(Debug, Clone, FromRow)]
pub struct PollOptionModel {
    pub id: Uuid,
    pub poll_id: Uuid,
    pub text: String,
    pub position: i32,
    pub votes_count: i32,
}

/// Database model for the poll_votes table
#[derive(Debug, Clone, FromRow)]
pub struct PollVoteModel {
    pub poll_id: Uuid,
    pub option_id: Uuid,
    pub user_id: Uuid,
}
