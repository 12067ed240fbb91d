//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in agora-core.
//! Each repository handles database operations for a specific domain entity.

mod error;
mod lookup;
mod notification;
mod poll;
mod reaction;

pub use lookup::{PgContentLookup, PgUserDirectory};
pub use notification::PgNotificationRepository;
pub use poll::PgPollRepository;
pub use reaction::PgReactionRepository;
