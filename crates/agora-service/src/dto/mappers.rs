//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use agora_core::entities::{Notification, PollOption};

use super::responses::{NotificationResponse, PollOptionResponse};

impl From<&PollOption> for PollOptionResponse {
    fn from(option: &PollOption) -> Self {
        Self {
            id: option.id,
            text: option.text.clone(),
            position: option.position,
            votes_count: option.votes_count,
        }
    }
}

impl From<PollOption> for PollOptionResponse {
    fn from(option: PollOption) -> Self {
        Self::from(&option)
    }
}

impl From<&Notification> for NotificationResponse {
    fn from(notification: &Notification) -> Self {
        Self {
            id: notification.id,
            actor_id: notification.actor_id,
            actor_username: notification.actor_username.clone(),
            message: notification.message.clone(),
            post_id: notification.post_id,
            comment_id: notification.comment_id,
            kind: notification.kind.as_str(),
            created_at: notification.created_at,
            is_read: notification.is_read,
            metadata: notification.metadata.clone(),
        }
    }
}

impl From<Notification> for NotificationResponse {
    fn from(notification: Notification) -> Self {
        Self::from(&notification)
    }
}
