//! # agora-core
//!
//! Domain layer containing entities, domain events, errors, and port traits
//! for the content interaction and notification fan-out pipeline.
//! This crate has zero dependencies on infrastructure (database, message bus, etc.).

pub mod entities;
pub mod error;
pub mod events;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{
    Notification, NotificationKind, Poll, PollOption, PollStatus, PollVote, Reaction,
    ReactionTarget, UserProfile,
};
pub use error::DomainError;
pub use events::{
    CommentCreated, CommentLiked, ContentEvent, EventPublisher, PostCreated, PostLiked,
    PostReported, PostUpdated, PublishError, Subject,
};
pub use traits::{
    ContentLookup, NotificationRepository, PollRepository, ReactionRepository, RepoResult,
    UserDirectory, VoteOutcome,
};
