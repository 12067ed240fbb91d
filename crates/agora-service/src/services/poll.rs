//! Poll service
//!
//! Poll creation, vote casting, and poll queries.

use agora_core::entities::{Poll, PollOption};
use agora_core::traits::VoteOutcome;
use chrono::Utc;
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::dto::{CreatePollRequest, PollOptionResponse, PollResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Poll service
pub struct PollService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PollService<'a> {
    /// Create a new PollService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a poll with its options
    #[instrument(skip(self, request), fields(post_id = %request.post_id))]
    pub async fn create_poll(&self, request: CreatePollRequest) -> ServiceResult<PollResponse> {
        request.validate()?;

        if request.post_id.is_nil() {
            return Err(ServiceError::validation("post id must not be nil"));
        }
        if request.expires_at <= Utc::now() {
            return Err(ServiceError::validation("expiry must be in the future"));
        }
        if request.options.iter().any(|text| text.trim().is_empty()) {
            return Err(ServiceError::validation("option text must not be empty"));
        }

        if self
            .ctx
            .poll_repo()
            .find_by_post(request.post_id)
            .await?
            .is_some()
        {
            return Err(ServiceError::conflict("post already has a poll"));
        }

        let poll = Poll::new(request.post_id, request.question, request.expires_at);
        let options: Vec<PollOption> = request
            .options
            .iter()
            .enumerate()
            .map(|(i, text)| PollOption::new(poll.id, text.clone(), i as i32))
            .collect();

        self.ctx.poll_repo().create(&poll, &options).await?;

        info!(poll_id = %poll.id, post_id = %poll.post_id, "Poll created");

        Ok(build_response(&poll, &options, 0, None))
    }

    /// Cast a vote.
    ///
    /// The first vote wins; repeating it is a no-op and switching options is
    /// rejected. Votes are refused once the poll has expired.
    #[instrument(skip(self))]
    pub async fn vote(
        &self,
        poll_id: Uuid,
        option_id: Uuid,
        user_id: Uuid,
    ) -> ServiceResult<VoteOutcome> {
        if poll_id.is_nil() || option_id.is_nil() || user_id.is_nil() {
            return Err(ServiceError::validation("ids must not be nil"));
        }

        let poll = self
            .ctx
            .poll_repo()
            .find_by_id(poll_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Poll", poll_id.to_string()))?;

        if !poll.is_open() {
            return Err(agora_core::DomainError::PollClosed(poll_id).into());
        }

        let outcome = self
            .ctx
            .poll_repo()
            .cast_vote(poll_id, option_id, user_id)
            .await?;

        if outcome == VoteOutcome::Recorded {
            info!(poll_id = %poll_id, option_id = %option_id, user_id = %user_id, "Vote recorded");
        }

        Ok(outcome)
    }

    /// Fetch the poll attached to a post, with the caller's vote if any
    #[instrument(skip(self))]
    pub async fn get_poll(
        &self,
        post_id: Uuid,
        user_id: Option<Uuid>,
    ) -> ServiceResult<PollResponse> {
        let poll = self
            .ctx
            .poll_repo()
            .find_by_post(post_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Poll", post_id.to_string()))?;

        let options = self.ctx.poll_repo().options(poll.id).await?;
        let total_votes = self.ctx.poll_repo().count_votes(poll.id).await?;

        let user_vote = match user_id {
            Some(user_id) => self
                .ctx
                .poll_repo()
                .find_vote(poll.id, user_id)
                .await?
                .map(|vote| vote.option_id),
            None => None,
        };

        Ok(build_response(&poll, &options, total_votes, user_vote))
    }
}

fn build_response(
    poll: &Poll,
    options: &[PollOption],
    total_votes: i64,
    user_vote: Option<Uuid>,
) -> PollResponse {
    PollResponse {
        id: poll.id,
        post_id: poll.post_id,
        question: poll.question.clone(),
        expires_at: poll.expires_at,
        is_open: poll.is_open(),
        total_votes,
        options: options.iter().map(PollOptionResponse::from).collect(),
        user_vote,
    }
}
