//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Uniqueness and atomicity guarantees live
//! behind these traits, in the storage engine.

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{Notification, Poll, PollOption, PollVote, Reaction, ReactionTarget, UserProfile};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Insert a reaction if the `(user, target)` slot is free.
    ///
    /// Returns `true` if a row was inserted, `false` if one already existed.
    /// A duplicate is a success, never an error; the existing row is left
    /// untouched (no flip).
    async fn create(&self, reaction: &Reaction) -> RepoResult<bool>;

    /// Delete the reaction for `(user, target)` if present.
    ///
    /// Returns `true` if a row was removed. Absence is not an error.
    async fn delete(&self, user_id: Uuid, target: ReactionTarget) -> RepoResult<bool>;

    /// Find the reaction for `(user, target)`
    async fn find(&self, user_id: Uuid, target: ReactionTarget) -> RepoResult<Option<Reaction>>;

    /// Fresh aggregate count of reactions for one `is_like` dimension.
    ///
    /// Always computed from the rows, never from a cached counter.
    async fn count(&self, target: ReactionTarget, is_like: bool) -> RepoResult<i32>;
}

// ============================================================================
// Poll Repository
// ============================================================================

/// Result of a vote-casting transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteOutcome {
    /// Vote row inserted and option counter incremented
    Recorded,
    /// The same vote already existed; nothing changed
    Unchanged,
}

#[async_trait]
pub trait PollRepository: Send + Sync {
    /// Insert a poll and its options in one transaction
    async fn create(&self, poll: &Poll, options: &[PollOption]) -> RepoResult<()>;

    /// Find a poll by its id
    async fn find_by_id(&self, poll_id: Uuid) -> RepoResult<Option<Poll>>;

    /// Find the poll attached to a post
    async fn find_by_post(&self, post_id: Uuid) -> RepoResult<Option<Poll>>;

    /// Options for a poll, in authoring order
    async fn options(&self, poll_id: Uuid) -> RepoResult<Vec<PollOption>>;

    /// Cast a vote inside a single transaction.
    ///
    /// Inserts the vote row and increments the option counter atomically.
    /// Re-voting the same option resolves to [`VoteOutcome::Unchanged`];
    /// voting a different option fails with `AlreadyVoted` and leaves all
    /// counters untouched.
    async fn cast_vote(
        &self,
        poll_id: Uuid,
        option_id: Uuid,
        user_id: Uuid,
    ) -> RepoResult<VoteOutcome>;

    /// Total votes, counted from the vote rows (not summed option counters)
    async fn count_votes(&self, poll_id: Uuid) -> RepoResult<i64>;

    /// The vote a user has cast in a poll, if any
    async fn find_vote(&self, poll_id: Uuid, user_id: Uuid) -> RepoResult<Option<PollVote>>;
}

// ============================================================================
// Notification Repository
// ============================================================================

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Persist a notification.
    ///
    /// Returns `true` if a row was inserted, `false` if the dedup key
    /// already existed (redelivered event).
    async fn save(&self, notification: &Notification) -> RepoResult<bool>;

    /// One page of a user's feed, newest first, plus the total row count
    async fn find_page(
        &self,
        user_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> RepoResult<(Vec<Notification>, i64)>;

    /// Existence check used before persisting a notification
    async fn user_exists(&self, user_id: Uuid) -> RepoResult<bool>;

    /// Existence check used before persisting a notification
    async fn post_exists(&self, post_id: Uuid) -> RepoResult<bool>;
}

// ============================================================================
// Collaborator Lookups
// ============================================================================

/// Read-only user lookup, used to enrich notifications with display names
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn get_user(&self, user_id: Uuid) -> RepoResult<Option<UserProfile>>;
}

/// Read-only content ownership lookup.
///
/// The write path resolves the target owner here so published events carry
/// the notification recipient without a synchronous callback.
#[async_trait]
pub trait ContentLookup: Send + Sync {
    async fn post_owner(&self, post_id: Uuid) -> RepoResult<Option<Uuid>>;

    async fn comment_owner(&self, comment_id: Uuid) -> RepoResult<Option<Uuid>>;
}
