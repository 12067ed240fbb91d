//! Reaction service
//!
//! Handles likes and dislikes on posts and comments (add, remove, query).

use agora_core::entities::{Reaction, ReactionTarget};
use agora_core::events::{CommentLiked, ContentEvent, PostLiked};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::dto::ReactionCountResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Add a reaction to a post or comment.
    ///
    /// Idempotent: if the user already reacted to this target, nothing
    /// changes and no event is published, whichever direction the existing
    /// reaction has. Returns the fresh count for the reaction's dimension.
    #[instrument(skip(self))]
    pub async fn react(
        &self,
        user_id: Uuid,
        target: ReactionTarget,
        is_like: bool,
    ) -> ServiceResult<i32> {
        validate_ids(user_id, target)?;

        let reaction = Reaction::new(target, user_id, is_like);
        let inserted = self.ctx.reaction_repo().create(&reaction).await?;

        let count = self.ctx.reaction_repo().count(target, is_like).await?;

        if inserted {
            info!(
                user_id = %user_id,
                target = %target,
                is_like = is_like,
                "Reaction added"
            );
            if is_like {
                self.publish_like_event(user_id, target).await;
            }
        }

        Ok(count)
    }

    /// Remove the user's reaction from a target.
    ///
    /// Returns `true` if a reaction was removed. Absence is not an error.
    #[instrument(skip(self))]
    pub async fn unreact(&self, user_id: Uuid, target: ReactionTarget) -> ServiceResult<bool> {
        validate_ids(user_id, target)?;

        let removed = self.ctx.reaction_repo().delete(user_id, target).await?;
        if removed {
            info!(user_id = %user_id, target = %target, "Reaction removed");
        }
        Ok(removed)
    }

    /// Like count for a target
    pub async fn count_likes(&self, target: ReactionTarget) -> ServiceResult<i32> {
        Ok(self.ctx.reaction_repo().count(target, true).await?)
    }

    /// Dislike count for a target
    pub async fn count_dislikes(&self, target: ReactionTarget) -> ServiceResult<i32> {
        Ok(self.ctx.reaction_repo().count(target, false).await?)
    }

    /// Whether the user has liked the target
    pub async fn is_liked(&self, user_id: Uuid, target: ReactionTarget) -> ServiceResult<bool> {
        let reaction = self.ctx.reaction_repo().find(user_id, target).await?;
        Ok(reaction.is_some_and(|r| r.is_like))
    }

    /// Both counts plus the requesting user's own reaction
    #[instrument(skip(self))]
    pub async fn counts(
        &self,
        target: ReactionTarget,
        user_id: Option<Uuid>,
    ) -> ServiceResult<ReactionCountResponse> {
        let likes = self.ctx.reaction_repo().count(target, true).await?;
        let dislikes = self.ctx.reaction_repo().count(target, false).await?;

        let user_reaction = match user_id {
            Some(user_id) => self
                .ctx
                .reaction_repo()
                .find(user_id, target)
                .await?
                .map(|r| r.is_like),
            None => None,
        };

        Ok(ReactionCountResponse {
            likes,
            dislikes,
            user_reaction,
        })
    }

    /// Publish the like event for a freshly inserted like.
    ///
    /// Fire-and-forget: the reaction is already durable, so lookup or
    /// transport failures are logged and swallowed.
    async fn publish_like_event(&self, user_id: Uuid, target: ReactionTarget) {
        let owner = match target {
            ReactionTarget::Post(post_id) => self.ctx.content_lookup().post_owner(post_id).await,
            ReactionTarget::Comment(comment_id) => {
                self.ctx.content_lookup().comment_owner(comment_id).await
            }
        };

        let target_user_id = match owner {
            Ok(Some(owner_id)) => owner_id,
            Ok(None) => {
                warn!(target = %target, "Reaction target has no owner, skipping event");
                return;
            }
            Err(e) => {
                warn!(target = %target, error = %e, "Owner lookup failed, skipping event");
                return;
            }
        };

        let event = match target {
            ReactionTarget::Post(post_id) => ContentEvent::PostLiked(PostLiked {
                actor_id: user_id,
                post_id,
                target_user_id,
            }),
            ReactionTarget::Comment(comment_id) => ContentEvent::CommentLiked(CommentLiked {
                actor_id: user_id,
                comment_id,
                target_user_id,
            }),
        };

        if let Err(e) = self.ctx.publisher().publish(&event).await {
            warn!(subject = %event.subject(), error = %e, "Failed to publish like event");
        }
    }
}

fn validate_ids(user_id: Uuid, target: ReactionTarget) -> ServiceResult<()> {
    if user_id.is_nil() {
        return Err(ServiceError::validation("user id must not be nil"));
    }
    if target.id().is_nil() {
        return Err(ServiceError::validation("target id must not be nil"));
    }
    Ok(())
}
