//! Content event definitions
//!
//! A closed set of event kinds with one typed payload each, dispatched
//! through a static subject → decoder mapping. Payloads carry enough
//! context to build a notification without calling back into the
//! originating service.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Wire subjects, one per event kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subject {
    PostCreated,
    PostUpdated,
    CommentCreated,
    PostReported,
    PostLiked,
    CommentLiked,
}

impl Subject {
    /// Every subject the dispatcher listens on
    pub const ALL: [Self; 6] = [
        Self::PostCreated,
        Self::PostUpdated,
        Self::CommentCreated,
        Self::PostReported,
        Self::PostLiked,
        Self::CommentLiked,
    ];

    /// The bus channel name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::PostCreated => "post.created",
            Self::PostUpdated => "post.updated",
            Self::CommentCreated => "comment.created",
            Self::PostReported => "post.reported",
            Self::PostLiked => "post.liked",
            Self::CommentLiked => "comment.liked",
        }
    }

    /// Parse a channel name back to a `Subject`
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "post.created" => Some(Self::PostCreated),
            "post.updated" => Some(Self::PostUpdated),
            "comment.created" => Some(Self::CommentCreated),
            "post.reported" => Some(Self::PostReported),
            "post.liked" => Some(Self::PostLiked),
            "comment.liked" => Some(Self::CommentLiked),
            _ => None,
        }
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostCreated {
    pub post_id: Uuid,
    pub author_id: Uuid,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostUpdated {
    pub post_id: Uuid,
    pub author_id: Uuid,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentCreated {
    pub comment_id: Uuid,
    pub post_id: Uuid,
    pub actor_id: Uuid,
    pub target_user_id: Uuid,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostReported {
    pub post_id: Uuid,
    pub reporter_id: Uuid,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostLiked {
    pub actor_id: Uuid,
    pub post_id: Uuid,
    pub target_user_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentLiked {
    pub actor_id: Uuid,
    pub comment_id: Uuid,
    pub target_user_id: Uuid,
}

/// All content events the pipeline produces or consumes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentEvent {
    PostCreated(PostCreated),
    PostUpdated(PostUpdated),
    CommentCreated(CommentCreated),
    PostReported(PostReported),
    PostLiked(PostLiked),
    CommentLiked(CommentLiked),
}

impl ContentEvent {
    /// The subject this event is published on
    pub const fn subject(&self) -> Subject {
        match self {
            Self::PostCreated(_) => Subject::PostCreated,
            Self::PostUpdated(_) => Subject::PostUpdated,
            Self::CommentCreated(_) => Subject::CommentCreated,
            Self::PostReported(_) => Subject::PostReported,
            Self::PostLiked(_) => Subject::PostLiked,
            Self::CommentLiked(_) => Subject::CommentLiked,
        }
    }

    /// Serialize the payload to JSON bytes
    pub fn encode(&self) -> Result<Vec<u8>, serde_json::Error> {
        match self {
            Self::PostCreated(p) => serde_json::to_vec(p),
            Self::PostUpdated(p) => serde_json::to_vec(p),
            Self::CommentCreated(p) => serde_json::to_vec(p),
            Self::PostReported(p) => serde_json::to_vec(p),
            Self::PostLiked(p) => serde_json::to_vec(p),
            Self::CommentLiked(p) => serde_json::to_vec(p),
        }
    }

    /// Decode a payload received on the given subject
    pub fn decode(subject: Subject, payload: &[u8]) -> Result<Self, serde_json::Error> {
        Ok(match subject {
            Subject::PostCreated => Self::PostCreated(serde_json::from_slice(payload)?),
            Subject::PostUpdated => Self::PostUpdated(serde_json::from_slice(payload)?),
            Subject::CommentCreated => Self::CommentCreated(serde_json::from_slice(payload)?),
            Subject::PostReported => Self::PostReported(serde_json::from_slice(payload)?),
            Subject::PostLiked => Self::PostLiked(serde_json::from_slice(payload)?),
            Subject::CommentLiked => Self::CommentLiked(serde_json::from_slice(payload)?),
        })
    }
}
