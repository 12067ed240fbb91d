//! Entity to model mappers
//!
//! This module provides conversions between domain entities (agora-core) and database models.
//! - `From<Model> for Entity` / `TryFrom<Model>`: Convert database rows to domain objects
//! - `*Insert` structs: Prepare entity data for database operations

mod notification;
mod poll;
mod reaction;

pub use notification::{notification_from_model, NotificationInsert};
pub use poll::{PollInsert, PollOptionInsert};
pub use reaction::{reaction_from_model, ReactionInsert};
