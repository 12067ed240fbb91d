//! Database models - SQLx-compatible structs for PostgreSQL tables

mod notification;
mod poll;
mod reaction;
mod user;

pub use notification::NotificationModel;
pub use poll::{PollModel, PollOptionModel, PollVoteModel};
pub use reaction::ReactionModel;
pub use user::UserRefModel;
