//! Domain events - typed messages emitted when content state changes
//!
//! Events cross the process boundary as JSON on a pub/sub bus and are
//! consumed at-least-once by the notification dispatcher.

mod content_event;
mod publisher;

pub use content_event::{
    CommentCreated, CommentLiked, ContentEvent, PostCreated, PostLiked, PostReported,
    PostUpdated, Subject,
};
pub use publisher::{EventPublisher, PublishError};
