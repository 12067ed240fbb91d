//! Event publisher port
//!
//! The write path publishes through this trait after its transaction has
//! committed. Delivery is fire-and-forget: call sites log failures and
//! never propagate them to the business caller.

use async_trait::async_trait;
use thiserror::Error;

use super::ContentEvent;

/// Errors a publisher implementation can produce
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("Failed to encode event payload: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Transport error: {0}")]
    Transport(String),
}

/// Port for handing a domain event to the message bus.
///
/// `publish` must return once the transport has accepted the message; it
/// never waits for subscriber acknowledgment.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, event: &ContentEvent) -> Result<(), PublishError>;
}
