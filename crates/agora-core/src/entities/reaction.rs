//! Reaction entity - a like or dislike tying one user to one post or comment

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// The content a reaction is attached to.
///
/// Exactly one of post/comment, enforced at the type level instead of a
/// pair of nullable ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReactionTarget {
    Post(Uuid),
    Comment(Uuid),
}

impl ReactionTarget {
    /// The raw target id, regardless of kind
    #[inline]
    pub const fn id(&self) -> Uuid {
        match self {
            Self::Post(id) | Self::Comment(id) => *id,
        }
    }

    /// Post id if this targets a post
    #[inline]
    pub const fn post_id(&self) -> Option<Uuid> {
        match self {
            Self::Post(id) => Some(*id),
            Self::Comment(_) => None,
        }
    }

    /// Comment id if this targets a comment
    #[inline]
    pub const fn comment_id(&self) -> Option<Uuid> {
        match self {
            Self::Comment(id) => Some(*id),
            Self::Post(_) => None,
        }
    }

    pub const fn is_post(&self) -> bool {
        matches!(self, Self::Post(_))
    }
}

impl std::fmt::Display for ReactionTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Post(id) => write!(f, "post:{id}"),
            Self::Comment(id) => write!(f, "comment:{id}"),
        }
    }
}

/// Reaction entity
///
/// At most one reaction exists per `(user_id, target)` pair; the storage
/// layer enforces this with unique indexes, so concurrent inserts race
/// safely and the loser observes a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub id: Uuid,
    pub target: ReactionTarget,
    pub user_id: Uuid,
    pub is_like: bool,
    pub created_at: DateTime<Utc>,
}

impl Reaction {
    /// Create a new Reaction with a fresh id
    pub fn new(target: ReactionTarget, user_id: Uuid, is_like: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            target,
            user_id,
            is_like,
            created_at: Utc::now(),
        }
    }
}
