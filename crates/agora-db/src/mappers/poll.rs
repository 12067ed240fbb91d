//! Poll entity <-> model mappers

use agora_core::entities::{Poll, PollOption, PollVote};
use uuid::Uuid;

use crate::models::{PollModel, PollOptionModel, PollVoteModel};

/// Convert PollModel to Poll entity
impl From<PollModel> for Poll {
    fn from(model: PollModel) -> Self {
        Poll {
            id: model.id,
            post_id: model.post_id,
            question: model.question,
            expires_at: model.expires_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Convert PollOptionModel to PollOption entity
impl From<PollOptionModel> for PollOption {
    fn from(model: PollOptionModel) -> Self {
        PollOption {
            id: model.id,
            poll_id: model.poll_id,
            text: model.text,
            position: model.position,
            votes_count: model.votes_count,
        }
    }
}

/// Convert PollVoteModel to PollVote entity
impl From<PollVoteModel> for PollVote {
    fn from(model: PollVoteModel) -> Self {
        PollVote {
            poll_id: model.poll_id,
            option_id: model.option_id,
            user_id: model.user_id,
        }
    }
}

/// Poll entity values for database insertion
pub struct PollInsert<'a> {
    pub id: Uuid,
    pub post_id: Uuid,
    pub question: &'a str,
    pub expires_at: chrono::DateTime<chrono::Utc>,
}

impl<'a> PollInsert<'a> {
    pub fn new(poll: &'a Poll) -> Self {
        Self {
            id: poll.id,
            post_id: poll.post_id,
            question: &poll.question,
            expires_at: poll.expires_at,
        }
    }
}

/// Poll option entity values for database insertion
pub struct PollOptionInsert<'a> {
    pub id: Uuid,
    pub poll_id: Uuid,
    pub text: &'a str,
    pub position: i32,
}

impl<'a> PollOptionInsert<'a> {
    pub fn new(option: &'a PollOption) -> Self {
        Self {
            id: option.id,
            poll_id: option.poll_id,
            text: &option.text,
            position: option.position,
        }
    }
}
