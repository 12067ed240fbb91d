//! In-memory port implementations
//!
//! Each fake mirrors the contract of its PostgreSQL or Redis counterpart,
//! including idempotent inserts and vote immutability.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use agora_core::entities::{
    Notification, Poll, PollOption, PollVote, Reaction, ReactionTarget, UserProfile,
};
use agora_core::events::{ContentEvent, EventPublisher, PublishError};
use agora_core::traits::{
    ContentLookup, NotificationRepository, PollRepository, ReactionRepository, RepoResult,
    UserDirectory, VoteOutcome,
};
use agora_core::DomainError;

/// Shared world state: users, posts and comments owned by other services
#[derive(Debug, Default)]
pub struct World {
    pub users: HashMap<Uuid, String>,
    /// post id -> owner id
    pub posts: HashMap<Uuid, Uuid>,
    /// comment id -> (post id, owner id)
    pub comments: HashMap<Uuid, (Uuid, Uuid)>,
}

pub type SharedWorld = Arc<Mutex<World>>;

// ============================================================================
// Reactions
// ============================================================================

#[derive(Default)]
pub struct MemoryReactionRepository {
    rows: Mutex<HashMap<(Uuid, ReactionTarget), Reaction>>,
}

#[async_trait]
impl ReactionRepository for MemoryReactionRepository {
    async fn create(&self, reaction: &Reaction) -> RepoResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        let key = (reaction.user_id, reaction.target);
        if rows.contains_key(&key) {
            return Ok(false);
        }
        rows.insert(key, reaction.clone());
        Ok(true)
    }

    async fn delete(&self, user_id: Uuid, target: ReactionTarget) -> RepoResult<bool> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .remove(&(user_id, target))
            .is_some())
    }

    async fn find(&self, user_id: Uuid, target: ReactionTarget) -> RepoResult<Option<Reaction>> {
        Ok(self.rows.lock().unwrap().get(&(user_id, target)).cloned())
    }

    async fn count(&self, target: ReactionTarget, is_like: bool) -> RepoResult<i32> {
        let count = self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|r| r.target == target && r.is_like == is_like)
            .count();
        Ok(i32::try_from(count).unwrap())
    }
}

// ============================================================================
// Polls
// ============================================================================

#[derive(Debug, Default)]
struct PollStore {
    polls: HashMap<Uuid, Poll>,
    options: HashMap<Uuid, Vec<PollOption>>,
    /// (poll id, user id) -> vote
    votes: HashMap<(Uuid, Uuid), PollVote>,
}

#[derive(Default)]
pub struct MemoryPollRepository {
    store: Mutex<PollStore>,
}

#[async_trait]
impl PollRepository for MemoryPollRepository {
    async fn create(&self, poll: &Poll, options: &[PollOption]) -> RepoResult<()> {
        let mut store = self.store.lock().unwrap();
        store.polls.insert(poll.id, poll.clone());
        store.options.insert(poll.id, options.to_vec());
        Ok(())
    }

    async fn find_by_id(&self, poll_id: Uuid) -> RepoResult<Option<Poll>> {
        Ok(self.store.lock().unwrap().polls.get(&poll_id).cloned())
    }

    async fn find_by_post(&self, post_id: Uuid) -> RepoResult<Option<Poll>> {
        Ok(self
            .store
            .lock()
            .unwrap()
            .polls
            .values()
            .find(|p| p.post_id == post_id)
            .cloned())
    }

    async fn options(&self, poll_id: Uuid) -> RepoResult<Vec<PollOption>> {
        let mut options = self
            .store
            .lock()
            .unwrap()
            .options
            .get(&poll_id)
            .cloned()
            .unwrap_or_default();
        options.sort_by_key(|o| o.position);
        Ok(options)
    }

    async fn cast_vote(
        &self,
        poll_id: Uuid,
        option_id: Uuid,
        user_id: Uuid,
    ) -> RepoResult<VoteOutcome> {
        let mut store = self.store.lock().unwrap();

        if let Some(existing) = store.votes.get(&(poll_id, user_id)) {
            return if existing.option_id == option_id {
                Ok(VoteOutcome::Unchanged)
            } else {
                Err(DomainError::AlreadyVoted { poll_id })
            };
        }

        let options = store
            .options
            .get_mut(&poll_id)
            .ok_or(DomainError::PollNotFound(poll_id))?;
        let option = options
            .iter_mut()
            .find(|o| o.id == option_id)
            .ok_or(DomainError::PollOptionNotFound(option_id))?;
        option.votes_count += 1;

        store.votes.insert(
            (poll_id, user_id),
            PollVote {
                poll_id,
                option_id,
                user_id,
            },
        );
        Ok(VoteOutcome::Recorded)
    }

    async fn count_votes(&self, poll_id: Uuid) -> RepoResult<i64> {
        let count = self
            .store
            .lock()
            .unwrap()
            .votes
            .keys()
            .filter(|(p, _)| *p == poll_id)
            .count();
        Ok(i64::try_from(count).unwrap())
    }

    async fn find_vote(&self, poll_id: Uuid, user_id: Uuid) -> RepoResult<Option<PollVote>> {
        Ok(self
            .store
            .lock()
            .unwrap()
            .votes
            .get(&(poll_id, user_id))
            .copied())
    }
}

// ============================================================================
// Notifications
// ============================================================================

pub struct MemoryNotificationRepository {
    world: SharedWorld,
    rows: Mutex<Vec<Notification>>,
    dedup: Mutex<HashSet<String>>,
}

impl MemoryNotificationRepository {
    pub fn new(world: SharedWorld) -> Self {
        Self {
            world,
            rows: Mutex::new(Vec::new()),
            dedup: Mutex::new(HashSet::new()),
        }
    }

    /// Snapshot of everything saved so far
    pub fn all(&self) -> Vec<Notification> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationRepository for MemoryNotificationRepository {
    async fn save(&self, notification: &Notification) -> RepoResult<bool> {
        let mut dedup = self.dedup.lock().unwrap();
        if !dedup.insert(notification.dedup_key()) {
            return Ok(false);
        }
        self.rows.lock().unwrap().push(notification.clone());
        Ok(true)
    }

    async fn find_page(
        &self,
        user_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> RepoResult<(Vec<Notification>, i64)> {
        let rows = self.rows.lock().unwrap();
        let mut matching: Vec<Notification> = rows
            .iter()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = i64::try_from(matching.len()).unwrap();
        let page = matching
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(0))
            .take(usize::try_from(limit).unwrap_or(0))
            .collect();
        Ok((page, total))
    }

    async fn user_exists(&self, user_id: Uuid) -> RepoResult<bool> {
        Ok(self.world.lock().unwrap().users.contains_key(&user_id))
    }

    async fn post_exists(&self, post_id: Uuid) -> RepoResult<bool> {
        Ok(self.world.lock().unwrap().posts.contains_key(&post_id))
    }
}

// ============================================================================
// Lookups
// ============================================================================

pub struct MemoryUserDirectory {
    world: SharedWorld,
}

impl MemoryUserDirectory {
    pub fn new(world: SharedWorld) -> Self {
        Self { world }
    }
}

#[async_trait]
impl UserDirectory for MemoryUserDirectory {
    async fn get_user(&self, user_id: Uuid) -> RepoResult<Option<UserProfile>> {
        Ok(self
            .world
            .lock()
            .unwrap()
            .users
            .get(&user_id)
            .map(|username| UserProfile {
                id: user_id,
                username: username.clone(),
            }))
    }
}

pub struct MemoryContentLookup {
    world: SharedWorld,
}

impl MemoryContentLookup {
    pub fn new(world: SharedWorld) -> Self {
        Self { world }
    }
}

#[async_trait]
impl ContentLookup for MemoryContentLookup {
    async fn post_owner(&self, post_id: Uuid) -> RepoResult<Option<Uuid>> {
        Ok(self.world.lock().unwrap().posts.get(&post_id).copied())
    }

    async fn comment_owner(&self, comment_id: Uuid) -> RepoResult<Option<Uuid>> {
        Ok(self
            .world
            .lock()
            .unwrap()
            .comments
            .get(&comment_id)
            .map(|(_, owner)| *owner))
    }
}

// ============================================================================
// Publishers
// ============================================================================

/// Publisher that records every event instead of sending it anywhere
#[derive(Default)]
pub struct CapturingPublisher {
    events: Mutex<Vec<ContentEvent>>,
}

impl CapturingPublisher {
    /// Snapshot of everything published so far
    pub fn published(&self) -> Vec<ContentEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventPublisher for CapturingPublisher {
    async fn publish(&self, event: &ContentEvent) -> Result<(), PublishError> {
        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }
}

/// Publisher whose transport is always down
#[derive(Default)]
pub struct FailingPublisher;

#[async_trait]
impl EventPublisher for FailingPublisher {
    async fn publish(&self, _event: &ContentEvent) -> Result<(), PublishError> {
        Err(PublishError::Transport("bus unavailable".to_string()))
    }
}
