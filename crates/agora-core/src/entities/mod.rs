//! Domain entities - core business objects

mod notification;
mod poll;
mod reaction;
mod user;

pub use notification::{Notification, NotificationKind};
pub use poll::{Poll, PollOption, PollStatus, PollVote};
pub use reaction::{Reaction, ReactionTarget};
pub use user::UserProfile;
