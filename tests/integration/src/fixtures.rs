//! Test fixtures
//!
//! Wires the in-memory fakes into a ServiceContext and exposes handles for
//! assertions and world mutation.

use std::sync::{Arc, Mutex};

use uuid::Uuid;

use agora_service::ServiceContext;

use crate::fakes::{
    CapturingPublisher, MemoryContentLookup, MemoryNotificationRepository, MemoryPollRepository,
    MemoryReactionRepository, MemoryUserDirectory, SharedWorld, World,
};

/// A fully wired in-memory pipeline
pub struct TestContext {
    pub ctx: ServiceContext,
    pub world: SharedWorld,
    pub reactions: Arc<MemoryReactionRepository>,
    pub polls: Arc<MemoryPollRepository>,
    pub notifications: Arc<MemoryNotificationRepository>,
    pub publisher: Arc<CapturingPublisher>,
}

impl TestContext {
    pub fn new() -> Self {
        let world: SharedWorld = Arc::new(Mutex::new(World::default()));
        let reactions = Arc::new(MemoryReactionRepository::default());
        let polls = Arc::new(MemoryPollRepository::default());
        let notifications = Arc::new(MemoryNotificationRepository::new(world.clone()));
        let publisher = Arc::new(CapturingPublisher::default());

        let ctx = ServiceContext::new(
            reactions.clone(),
            polls.clone(),
            notifications.clone(),
            Arc::new(MemoryUserDirectory::new(world.clone())),
            Arc::new(MemoryContentLookup::new(world.clone())),
            publisher.clone(),
        );

        Self {
            ctx,
            world,
            reactions,
            polls,
            notifications,
            publisher,
        }
    }

    /// Register a user and return its id
    pub fn add_user(&self, username: &str) -> Uuid {
        let id = Uuid::new_v4();
        self.world
            .lock()
            .unwrap()
            .users
            .insert(id, username.to_string());
        id
    }

    /// Register a post owned by `owner_id` and return its id
    pub fn add_post(&self, owner_id: Uuid) -> Uuid {
        let id = Uuid::new_v4();
        self.world.lock().unwrap().posts.insert(id, owner_id);
        id
    }

    /// Register a comment on `post_id` owned by `owner_id` and return its id
    pub fn add_comment(&self, post_id: Uuid, owner_id: Uuid) -> Uuid {
        let id = Uuid::new_v4();
        self.world
            .lock()
            .unwrap()
            .comments
            .insert(id, (post_id, owner_id));
        id
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
