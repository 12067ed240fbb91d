//! Event dispatcher
//!
//! Consumes bus messages and turns each content event into exactly one
//! durable notification. A failed message is logged and skipped; the loop
//! never dies on bad input.

use agora_bus::ReceivedMessage;
use agora_core::entities::{Notification, NotificationKind};
use agora_core::events::ContentEvent;
use serde_json::json;
use tokio::sync::broadcast;
use tracing::{debug, error, info, instrument, warn};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::notification::NotificationService;

/// Event dispatcher
pub struct EventDispatcher {
    ctx: ServiceContext,
}

impl EventDispatcher {
    /// Create a new EventDispatcher
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    /// Consume messages until the subscriber shuts down.
    ///
    /// Lagged receivers drop the missed messages and keep going; handler
    /// errors are logged per message.
    pub async fn run(&self, mut rx: broadcast::Receiver<ReceivedMessage>) {
        info!("Event dispatcher started");
        loop {
            match rx.recv().await {
                Ok(message) => self.handle_message(&message).await,
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!(skipped = skipped, "Dispatcher lagged behind the bus");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    info!("Event dispatcher stopped");
                    break;
                }
            }
        }
    }

    /// Handle a single bus message
    pub async fn handle_message(&self, message: &ReceivedMessage) {
        let Some(subject) = message.subject else {
            warn!("Message on unknown channel, skipping");
            return;
        };

        let Some(event) = &message.event else {
            error!(subject = %subject, "Undecodable payload, skipping");
            return;
        };

        match self.handle_event(event).await {
            Ok(true) => debug!(subject = %subject, "Notification written"),
            Ok(false) => debug!(subject = %subject, "Duplicate event, no-op"),
            Err(e) => error!(subject = %subject, error = %e, "Failed to handle event"),
        }
    }

    /// Build and persist the notification for one event.
    ///
    /// Returns `true` if a notification row was written.
    #[instrument(skip(self, event), fields(subject = %event.subject()))]
    pub async fn handle_event(&self, event: &ContentEvent) -> ServiceResult<bool> {
        let notification = match event {
            ContentEvent::PostCreated(p) => Notification::new(
                NotificationKind::NewPost,
                p.author_id,
                p.author_id,
                format!("A new post was created: {}", p.title),
            )
            .with_post(p.post_id)
            .with_metadata(json!({ "title": p.title })),

            ContentEvent::PostUpdated(p) => Notification::new(
                NotificationKind::PostUpdate,
                p.author_id,
                p.author_id,
                "Your post has been updated.",
            )
            .with_post(p.post_id)
            .with_metadata(json!({ "title": p.title })),

            ContentEvent::CommentCreated(c) => Notification::new(
                NotificationKind::Comment,
                c.target_user_id,
                c.actor_id,
                "New comment created on your post.",
            )
            .with_post(c.post_id)
            .with_comment(c.comment_id)
            .with_metadata(json!({ "content": c.content })),

            ContentEvent::PostReported(r) => Notification::new(
                NotificationKind::Report,
                r.reporter_id,
                r.reporter_id,
                format!("A post has been reported: {}", r.post_id),
            )
            .with_post(r.post_id)
            .with_metadata(json!({ "reason": r.reason })),

            ContentEvent::PostLiked(l) => Notification::new(
                NotificationKind::PostLike,
                l.target_user_id,
                l.actor_id,
                "Your post got a new like!",
            )
            .with_post(l.post_id),

            ContentEvent::CommentLiked(l) => Notification::new(
                NotificationKind::CommentLike,
                l.target_user_id,
                l.actor_id,
                "Your comment got a new like!",
            )
            .with_comment(l.comment_id),
        };

        let notification = self.enrich_actor(notification).await;

        NotificationService::new(&self.ctx)
            .deliver(&notification)
            .await
    }

    /// Fill in the actor's display name; a failed lookup leaves it empty
    async fn enrich_actor(&self, notification: Notification) -> Notification {
        match self.ctx.user_directory().get_user(notification.actor_id).await {
            Ok(Some(profile)) => notification.with_actor_username(profile.username),
            Ok(None) => notification,
            Err(e) => {
                warn!(actor_id = %notification.actor_id, error = %e, "Actor lookup failed");
                notification
            }
        }
    }
}
