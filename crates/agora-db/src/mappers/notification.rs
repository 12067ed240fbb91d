//! Notification entity <-> model mapper

use agora_core::entities::{Notification, NotificationKind};
use agora_core::error::DomainError;
use uuid::Uuid;

use crate::models::NotificationModel;

/// Convert a notifications row to the Notification entity.
///
/// Fails if the stored kind string is not one this service writes.
pub fn notification_from_model(model: NotificationModel) -> Result<Notification, DomainError> {
    let kind = NotificationKind::parse(&model.kind).ok_or_else(|| {
        DomainError::DatabaseError(format!(
            "notification {} has unknown kind '{}'",
            model.id, model.kind
        ))
    })?;

    Ok(Notification {
        id: model.id,
        user_id: model.user_id,
        actor_id: model.actor_id,
        actor_username: model.actor_username,
        message: model.message,
        post_id: model.post_id,
        comment_id: model.comment_id,
        kind,
        created_at: model.created_at,
        is_read: model.is_read,
        metadata: model.metadata,
    })
}

/// Notification entity values for database insertion
pub struct NotificationInsert<'a> {
    pub id: Uuid,
    pub user_id: Uuid,
    pub actor_id: Uuid,
    pub actor_username: &'a str,
    pub message: &'a str,
    pub post_id: Option<Uuid>,
    pub comment_id: Option<Uuid>,
    pub kind: &'static str,
    pub metadata: &'a serde_json::Value,
    pub dedup_key: String,
}

impl<'a> NotificationInsert<'a> {
    pub fn new(notification: &'a Notification) -> Self {
        Self {
            id: notification.id,
            user_id: notification.user_id,
            actor_id: notification.actor_id,
            actor_username: &notification.actor_username,
            message: &notification.message,
            post_id: notification.post_id,
            comment_id: notification.comment_id,
            kind: notification.kind.as_str(),
            metadata: &notification.metadata,
            dedup_key: notification.dedup_key(),
        }
    }
}
