//! Notification service
//!
//! Persists dispatcher-produced notifications and serves the feed.

use agora_core::entities::Notification;
use agora_core::DomainError;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::dto::{NotificationPageResponse, NotificationResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

const DEFAULT_PAGE_SIZE: i64 = 20;
const MAX_PAGE_SIZE: i64 = 100;

/// Notification service
pub struct NotificationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> NotificationService<'a> {
    /// Create a new NotificationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Persist a notification after validating its references.
    ///
    /// Returns `true` if a row was written, `false` if the dedup key matched
    /// an existing one (redelivered event).
    #[instrument(skip(self, notification), fields(kind = %notification.kind, user_id = %notification.user_id))]
    pub async fn deliver(&self, notification: &Notification) -> ServiceResult<bool> {
        if notification.user_id.is_nil() {
            return Err(ServiceError::validation("recipient id must not be nil"));
        }

        if !self
            .ctx
            .notification_repo()
            .user_exists(notification.user_id)
            .await?
        {
            return Err(DomainError::UserNotFound(notification.user_id).into());
        }

        if let Some(post_id) = notification.post_id {
            if !self.ctx.notification_repo().post_exists(post_id).await? {
                return Err(DomainError::PostNotFound(post_id).into());
            }
        }

        let inserted = self.ctx.notification_repo().save(notification).await?;
        if !inserted {
            debug!(dedup_key = %notification.dedup_key(), "Duplicate notification dropped");
        }
        Ok(inserted)
    }

    /// One page of the user's feed, newest first
    #[instrument(skip(self))]
    pub async fn get_notifications(
        &self,
        user_id: Uuid,
        page: i64,
        limit: i64,
    ) -> ServiceResult<NotificationPageResponse> {
        if user_id.is_nil() {
            return Err(ServiceError::validation("user id must not be nil"));
        }

        let page = page.max(1);
        let limit = if limit <= 0 {
            DEFAULT_PAGE_SIZE
        } else {
            limit.min(MAX_PAGE_SIZE)
        };
        let offset = (page - 1) * limit;

        let (notifications, total) = self
            .ctx
            .notification_repo()
            .find_page(user_id, limit, offset)
            .await?;

        Ok(NotificationPageResponse {
            data: notifications
                .iter()
                .map(NotificationResponse::from)
                .collect(),
            page,
            limit,
            total,
            has_more: offset + limit < total,
        })
    }
}
