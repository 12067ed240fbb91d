//! PostgreSQL implementation of ReactionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use agora_core::entities::{Reaction, ReactionTarget};
use agora_core::traits::{ReactionRepository, RepoResult};

use crate::mappers::{reaction_from_model, ReactionInsert};
use crate::models::ReactionModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self))]
    async fn create(&self, reaction: &Reaction) -> RepoResult<bool> {
        let insert = ReactionInsert::new(reaction);

        // One partial unique index per target kind guards the slot; a losing
        // concurrent insert reports zero rows affected instead of an error.
        let result = match reaction.target {
            ReactionTarget::Post(post_id) => {
                sqlx::query(
                    r#"
                    INSERT INTO reactions (id, post_id, user_id, is_like, created_at)
                    VALUES ($1, $2, $3, $4, $5)
                    ON CONFLICT (user_id, post_id) WHERE post_id IS NOT NULL DO NOTHING
                    "#,
                )
                .bind(insert.id)
                .bind(post_id)
                .bind(insert.user_id)
                .bind(insert.is_like)
                .bind(reaction.created_at)
                .execute(&self.pool)
                .await
            }
            ReactionTarget::Comment(comment_id) => {
                sqlx::query(
                    r#"
                    INSERT INTO reactions (id, comment_id, user_id, is_like, created_at)
                    VALUES ($1, $2, $3, $4, $5)
                    ON CONFLICT (user_id, comment_id) WHERE comment_id IS NOT NULL DO NOTHING
                    "#,
                )
                .bind(insert.id)
                .bind(comment_id)
                .bind(insert.user_id)
                .bind(insert.is_like)
                .bind(reaction.created_at)
                .execute(&self.pool)
                .await
            }
        }
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn delete(&self, user_id: Uuid, target: ReactionTarget) -> RepoResult<bool> {
        let result = match target {
            ReactionTarget::Post(post_id) => {
                sqlx::query("DELETE FROM reactions WHERE user_id = $1 AND post_id = $2")
                    .bind(user_id)
                    .bind(post_id)
                    .execute(&self.pool)
                    .await
            }
            ReactionTarget::Comment(comment_id) => {
                sqlx::query("DELETE FROM reactions WHERE user_id = $1 AND comment_id = $2")
                    .bind(user_id)
                    .bind(comment_id)
                    .execute(&self.pool)
                    .await
            }
        }
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn find(&self, user_id: Uuid, target: ReactionTarget) -> RepoResult<Option<Reaction>> {
        let result = match target {
            ReactionTarget::Post(post_id) => {
                sqlx::query_as::<_, ReactionModel>(
                    r#"
                    SELECT id, post_id, comment_id, user_id, is_like, created_at
                    FROM reactions
                    WHERE user_id = $1 AND post_id = $2
                    "#,
                )
                .bind(user_id)
                .bind(post_id)
                .fetch_optional(&self.pool)
                .await
            }
            ReactionTarget::Comment(comment_id) => {
                sqlx::query_as::<_, ReactionModel>(
                    r#"
                    SELECT id, post_id, comment_id, user_id, is_like, created_at
                    FROM reactions
                    WHERE user_id = $1 AND comment_id = $2
                    "#,
                )
                .bind(user_id)
                .bind(comment_id)
                .fetch_optional(&self.pool)
                .await
            }
        }
        .map_err(map_db_error)?;

        result.map(reaction_from_model).transpose()
    }

    #[instrument(skip(self))]
    async fn count(&self, target: ReactionTarget, is_like: bool) -> RepoResult<i32> {
        let count = match target {
            ReactionTarget::Post(post_id) => {
                sqlx::query_scalar::<_, i64>(
                    "SELECT COUNT(*) FROM reactions WHERE post_id = $1 AND is_like = $2",
                )
                .bind(post_id)
                .bind(is_like)
                .fetch_one(&self.pool)
                .await
            }
            ReactionTarget::Comment(comment_id) => {
                sqlx::query_scalar::<_, i64>(
                    "SELECT COUNT(*) FROM reactions WHERE comment_id = $1 AND is_like = $2",
                )
                .bind(comment_id)
                .bind(is_like)
                .fetch_one(&self.pool)
                .await
            }
        }
        .map_err(map_db_error)?;

        Ok(i32::try_from(count).unwrap_or(i32::MAX))
    }
}
