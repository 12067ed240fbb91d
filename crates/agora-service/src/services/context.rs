//! Service context - dependency container for services
//!
//! Holds all repositories, lookups, and the event publisher needed by services.

use std::sync::Arc;

use agora_core::events::EventPublisher;
use agora_core::traits::{
    ContentLookup, NotificationRepository, PollRepository, ReactionRepository, UserDirectory,
};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Repositories for reactions, polls and notifications
/// - Read-only user and content ownership lookups
/// - The event publisher for the message bus
#[derive(Clone)]
pub struct ServiceContext {
    reaction_repo: Arc<dyn ReactionRepository>,
    poll_repo: Arc<dyn PollRepository>,
    notification_repo: Arc<dyn NotificationRepository>,
    user_directory: Arc<dyn UserDirectory>,
    content_lookup: Arc<dyn ContentLookup>,
    publisher: Arc<dyn EventPublisher>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        reaction_repo: Arc<dyn ReactionRepository>,
        poll_repo: Arc<dyn PollRepository>,
        notification_repo: Arc<dyn NotificationRepository>,
        user_directory: Arc<dyn UserDirectory>,
        content_lookup: Arc<dyn ContentLookup>,
        publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            reaction_repo,
            poll_repo,
            notification_repo,
            user_directory,
            content_lookup,
            publisher,
        }
    }

    /// Get the reaction repository
    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }

    /// Get the poll repository
    pub fn poll_repo(&self) -> &dyn PollRepository {
        self.poll_repo.as_ref()
    }

    /// Get the notification repository
    pub fn notification_repo(&self) -> &dyn NotificationRepository {
        self.notification_repo.as_ref()
    }

    /// Get the user directory
    pub fn user_directory(&self) -> &dyn UserDirectory {
        self.user_directory.as_ref()
    }

    /// Get the content ownership lookup
    pub fn content_lookup(&self) -> &dyn ContentLookup {
        self.content_lookup.as_ref()
    }

    /// Get the event publisher
    pub fn publisher(&self) -> &dyn EventPublisher {
        self.publisher.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("publisher", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    reaction_repo: Option<Arc<dyn ReactionRepository>>,
    poll_repo: Option<Arc<dyn PollRepository>>,
    notification_repo: Option<Arc<dyn NotificationRepository>>,
    user_directory: Option<Arc<dyn UserDirectory>>,
    content_lookup: Option<Arc<dyn ContentLookup>>,
    publisher: Option<Arc<dyn EventPublisher>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reaction_repo(mut self, repo: Arc<dyn ReactionRepository>) -> Self {
        self.reaction_repo = Some(repo);
        self
    }

    pub fn poll_repo(mut self, repo: Arc<dyn PollRepository>) -> Self {
        self.poll_repo = Some(repo);
        self
    }

    pub fn notification_repo(mut self, repo: Arc<dyn NotificationRepository>) -> Self {
        self.notification_repo = Some(repo);
        self
    }

    pub fn user_directory(mut self, directory: Arc<dyn UserDirectory>) -> Self {
        self.user_directory = Some(directory);
        self
    }

    pub fn content_lookup(mut self, lookup: Arc<dyn ContentLookup>) -> Self {
        self.content_lookup = Some(lookup);
        self
    }

    pub fn publisher(mut self, publisher: Arc<dyn EventPublisher>) -> Self {
        self.publisher = Some(publisher);
        self
    }

    /// Build the context, failing if any dependency is missing
    pub fn build(self) -> Result<ServiceContext, &'static str> {
        Ok(ServiceContext {
            reaction_repo: self.reaction_repo.ok_or("reaction_repo is required")?,
            poll_repo: self.poll_repo.ok_or("poll_repo is required")?,
            notification_repo: self
                .notification_repo
                .ok_or("notification_repo is required")?,
            user_directory: self.user_directory.ok_or("user_directory is required")?,
            content_lookup: self.content_lookup.ok_or("content_lookup is required")?,
            publisher: self.publisher.ok_or("publisher is required")?,
        })
    }
}
