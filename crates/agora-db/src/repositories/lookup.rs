//! PostgreSQL implementations of the read-only collaborator lookups

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use agora_core::entities::UserProfile;
use agora_core::traits::{ContentLookup, RepoResult, UserDirectory};

use crate::models::UserRefModel;

use super::error::map_db_error;

/// PostgreSQL implementation of UserDirectory
#[derive(Clone)]
pub struct PgUserDirectory {
    pool: PgPool,
}

impl PgUserDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserDirectory for PgUserDirectory {
    #[instrument(skip(self))]
    async fn get_user(&self, user_id: Uuid) -> RepoResult<Option<UserProfile>> {
        let result =
            sqlx::query_as::<_, UserRefModel>("SELECT id, username FROM users WHERE id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(result.map(|model| UserProfile {
            id: model.id,
            username: model.username,
        }))
    }
}

/// PostgreSQL implementation of ContentLookup
#[derive(Clone)]
pub struct PgContentLookup {
    pool: PgPool,
}

impl PgContentLookup {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContentLookup for PgContentLookup {
    #[instrument(skip(self))]
    async fn post_owner(&self, post_id: Uuid) -> RepoResult<Option<Uuid>> {
        sqlx::query_scalar::<_, Uuid>("SELECT author_id FROM posts WHERE id = $1")
            .bind(post_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn comment_owner(&self, comment_id: Uuid) -> RepoResult<Option<Uuid>> {
        sqlx::query_scalar::<_, Uuid>("SELECT author_id FROM comments WHERE id = $1")
            .bind(comment_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)
    }
}
