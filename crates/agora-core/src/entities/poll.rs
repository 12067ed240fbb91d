//! Poll entities - a post attachment with options and exclusive, immutable votes

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Poll lifecycle state, derived from `expires_at`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollStatus {
    Open,
    Closed,
}

/// Poll entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Poll {
    pub id: Uuid,
    pub post_id: Uuid,
    pub question: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Poll {
    /// Create a new Poll with a fresh id
    pub fn new(post_id: Uuid, question: String, expires_at: DateTime<Utc>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            post_id,
            question,
            expires_at,
            created_at: now,
            updated_at: now,
        }
    }

    /// Status at the given instant
    pub fn status_at(&self, now: DateTime<Utc>) -> PollStatus {
        if now < self.expires_at {
            PollStatus::Open
        } else {
            PollStatus::Closed
        }
    }

    /// Whether the poll still accepts votes
    pub fn is_open(&self) -> bool {
        self.status_at(Utc::now()) == PollStatus::Open
    }
}

/// Poll option entity
///
/// `votes_count` is a stored counter, incremented in the same transaction
/// as the vote insert. `position` preserves the authoring order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollOption {
    pub id: Uuid,
    pub poll_id: Uuid,
    pub text: String,
    pub position: i32,
    pub votes_count: i32,
}

impl PollOption {
    pub fn new(poll_id: Uuid, text: String, position: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            poll_id,
            text,
            position,
            votes_count: 0,
        }
    }
}

/// A single user's vote, unique per `(poll_id, user_id)` and immutable once cast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollVote {
    pub poll_id: Uuid,
    pub option_id: Uuid,
    pub user_id: Uuid,
}
