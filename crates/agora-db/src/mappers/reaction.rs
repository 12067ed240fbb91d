//! Reaction entity <-> model mapper

use agora_core::entities::{Reaction, ReactionTarget};
use agora_core::error::DomainError;
use uuid::Uuid;

use crate::models::ReactionModel;

/// Convert a reactions row to the Reaction entity.
///
/// Fails if both target columns are NULL, which the CHECK constraint rules
/// out for rows written by this crate.
pub fn reaction_from_model(model: ReactionModel) -> Result<Reaction, DomainError> {
    let target = match (model.post_id, model.comment_id) {
        (Some(post_id), None) => ReactionTarget::Post(post_id),
        (None, Some(comment_id)) => ReactionTarget::Comment(comment_id),
        _ => {
            return Err(DomainError::DatabaseError(format!(
                "reaction {} has an inconsistent target",
                model.id
            )))
        }
    };

    Ok(Reaction {
        id: model.id,
        target,
        user_id: model.user_id,
        is_like: model.is_like,
        created_at: model.created_at,
    })
}

/// Reaction entity values for database insertion
pub struct ReactionInsert {
    pub id: Uuid,
    pub post_id: Option<Uuid>,
    pub comment_id: Option<Uuid>,
    pub user_id: Uuid,
    pub is_like: bool,
}

impl ReactionInsert {
    pub fn new(reaction: &Reaction) -> Self {
        Self {
            id: reaction.id,
            post_id: reaction.target.post_id(),
            comment_id: reaction.target.comment_id(),
            user_id: reaction.user_id,
            is_like: reaction.is_like,
        }
    }
}
