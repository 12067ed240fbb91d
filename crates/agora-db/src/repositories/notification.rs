//! PostgreSQL implementation of NotificationRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use agora_core::entities::Notification;
use agora_core::traits::{NotificationRepository, RepoResult};

use crate::mappers::{notification_from_model, NotificationInsert};
use crate::models::NotificationModel;

use super::error::map_db_error;

/// PostgreSQL implementation of NotificationRepository
#[derive(Clone)]
pub struct PgNotificationRepository {
    pool: PgPool,
}

impl PgNotificationRepository {
    /// Create a new PgNotificationRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationRepository for PgNotificationRepository {
    #[instrument(skip(self, notification), fields(kind = %notification.kind, user_id = %notification.user_id))]
    async fn save(&self, notification: &Notification) -> RepoResult<bool> {
        let insert = NotificationInsert::new(notification);

        // The unique index on dedup_key turns a redelivered event into a
        // zero-row insert.
        let result = sqlx::query(
            r#"
            INSERT INTO notifications
                (id, user_id, actor_id, actor_username, message,
                 post_id, comment_id, kind, created_at, is_read, metadata, dedup_key)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, FALSE, $10, $11)
            ON CONFLICT (dedup_key) DO NOTHING
            "#,
        )
        .bind(insert.id)
        .bind(insert.user_id)
        .bind(insert.actor_id)
        .bind(insert.actor_username)
        .bind(insert.message)
        .bind(insert.post_id)
        .bind(insert.comment_id)
        .bind(insert.kind)
        .bind(notification.created_at)
        .bind(insert.metadata)
        .bind(&insert.dedup_key)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn find_page(
        &self,
        user_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> RepoResult<(Vec<Notification>, i64)> {
        let models = sqlx::query_as::<_, NotificationModel>(
            r#"
            SELECT id, user_id, actor_id, actor_username, message,
                   post_id, comment_id, kind, created_at, is_read, metadata
            FROM notifications
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let total =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM notifications WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(&self.pool)
                .await
                .map_err(map_db_error)?;

        let notifications = models
            .into_iter()
            .map(notification_from_model)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((notifications, total))
    }

    #[instrument(skip(self))]
    async fn user_exists(&self, user_id: Uuid) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn post_exists(&self, post_id: Uuid) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM posts WHERE id = $1)")
            .bind(post_id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}
