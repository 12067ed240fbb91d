//! PostgreSQL implementation of PollRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use agora_core::entities::{Poll, PollOption, PollVote};
use agora_core::error::DomainError;
use agora_core::traits::{PollRepository, RepoResult, VoteOutcome};

use crate::mappers::{PollInsert, PollOptionInsert};
use crate::models::{PollModel, PollOptionModel, PollVoteModel};

use super::error::{
    is_foreign_key_violation, is_unique_violation, map_db_error, violated_constraint,
};

/// PostgreSQL implementation of PollRepository
#[derive(Clone)]
pub struct PgPollRepository {
    pool: PgPool,
}

impl PgPollRepository {
    /// Create a new PgPollRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_vote(&self, poll_id: Uuid, user_id: Uuid) -> RepoResult<Option<PollVote>> {
        let result = sqlx::query_as::<_, PollVoteModel>(
            r#"
            SELECT poll_id, option_id, user_id
            FROM poll_votes
            WHERE poll_id = $1 AND user_id = $2
            "#,
        )
        .bind(poll_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(PollVote::from))
    }

    /// Resolve an existing vote against the attempted option
    fn resolve_existing(vote: &PollVote, option_id: Uuid) -> RepoResult<VoteOutcome> {
        if vote.option_id == option_id {
            Ok(VoteOutcome::Unchanged)
        } else {
            Err(DomainError::AlreadyVoted {
                poll_id: vote.poll_id,
            })
        }
    }
}

#[async_trait]
impl PollRepository for PgPollRepository {
    #[instrument(skip(self, options))]
    async fn create(&self, poll: &Poll, options: &[PollOption]) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let insert = PollInsert::new(poll);
        sqlx::query(
            r#"
            INSERT INTO polls (id, post_id, question, expires_at, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(insert.id)
        .bind(insert.post_id)
        .bind(insert.question)
        .bind(insert.expires_at)
        .bind(poll.created_at)
        .bind(poll.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        for option in options {
            let insert = PollOptionInsert::new(option);
            sqlx::query(
                r#"
                INSERT INTO poll_options (id, poll_id, text, position, votes_count)
                VALUES ($1, $2, $3, $4, 0)
                "#,
            )
            .bind(insert.id)
            .bind(insert.poll_id)
            .bind(insert.text)
            .bind(insert.position)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, poll_id: Uuid) -> RepoResult<Option<Poll>> {
        let result = sqlx::query_as::<_, PollModel>(
            r#"
            SELECT id, post_id, question, expires_at, created_at, updated_at
            FROM polls
            WHERE id = $1
            "#,
        )
        .bind(poll_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Poll::from))
    }

    #[instrument(skip(self))]
    async fn find_by_post(&self, post_id: Uuid) -> RepoResult<Option<Poll>> {
        let result = sqlx::query_as::<_, PollModel>(
            r#"
            SELECT id, post_id, question, expires_at, created_at, updated_at
            FROM polls
            WHERE post_id = $1
            "#,
        )
        .bind(post_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Poll::from))
    }

    #[instrument(skip(self))]
    async fn options(&self, poll_id: Uuid) -> RepoResult<Vec<PollOption>> {
        let results = sqlx::query_as::<_, PollOptionModel>(
            r#"
            SELECT id, poll_id, text, position, votes_count
            FROM poll_options
            WHERE poll_id = $1
            ORDER BY position
            "#,
        )
        .bind(poll_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(PollOption::from).collect())
    }

    #[instrument(skip(self))]
    async fn cast_vote(
        &self,
        poll_id: Uuid,
        option_id: Uuid,
        user_id: Uuid,
    ) -> RepoResult<VoteOutcome> {
        // Fast path: an existing vote short-circuits before any write
        if let Some(vote) = self.fetch_vote(poll_id, user_id).await? {
            return Self::resolve_existing(&vote, option_id);
        }

        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let inserted = sqlx::query(
            r#"
            INSERT INTO poll_votes (poll_id, option_id, user_id)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(poll_id)
        .bind(option_id)
        .bind(user_id)
        .execute(&mut *tx)
        .await;

        if let Err(e) = inserted {
            drop(tx.rollback().await);
            // Lost an insert race on (poll_id, user_id); the winner's row
            // decides the outcome.
            if is_unique_violation(&e) {
                return match self.fetch_vote(poll_id, user_id).await? {
                    Some(vote) => Self::resolve_existing(&vote, option_id),
                    None => Err(DomainError::DatabaseError(
                        "vote row vanished after unique violation".to_string(),
                    )),
                };
            }
            // A rejected reference is a missing poll or option, not a storage
            // fault.
            if is_foreign_key_violation(&e) {
                return Err(match violated_constraint(&e) {
                    Some("poll_votes_option_id_fkey") => DomainError::PollOptionNotFound(option_id),
                    Some("poll_votes_poll_id_fkey") => DomainError::PollNotFound(poll_id),
                    _ => map_db_error(e),
                });
            }
            return Err(map_db_error(e));
        }

        // Counter increment rides the same transaction as the vote row; the
        // poll_id guard keeps a vote from bumping another poll's option.
        let updated = sqlx::query(
            r#"
            UPDATE poll_options
            SET votes_count = votes_count + 1
            WHERE id = $1 AND poll_id = $2
            "#,
        )
        .bind(option_id)
        .bind(poll_id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if updated.rows_affected() == 0 {
            drop(tx.rollback().await);
            return Err(DomainError::PollOptionNotFound(option_id));
        }

        tx.commit().await.map_err(map_db_error)?;
        Ok(VoteOutcome::Recorded)
    }

    #[instrument(skip(self))]
    async fn count_votes(&self, poll_id: Uuid) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM poll_votes WHERE poll_id = $1")
            .bind(poll_id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn find_vote(&self, poll_id: Uuid, user_id: Uuid) -> RepoResult<Option<PollVote>> {
        self.fetch_vote(poll_id, user_id).await
    }
}
