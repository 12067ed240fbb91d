//! Port traits - interfaces the domain needs from infrastructure

mod repositories;

pub use repositories::{
    ContentLookup, NotificationRepository, PollRepository, ReactionRepository, RepoResult,
    UserDirectory, VoteOutcome,
};
