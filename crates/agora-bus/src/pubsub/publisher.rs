//! Redis Pub/Sub publisher.
//!
//! Publishes content events to Redis, one channel per subject.

use async_trait::async_trait;
use redis::AsyncCommands;

use agora_core::events::{ContentEvent, EventPublisher, PublishError};

use crate::pool::RedisPool;

/// Redis-backed implementation of [`EventPublisher`]
#[derive(Clone)]
pub struct RedisEventPublisher {
    pool: RedisPool,
}

impl RedisEventPublisher {
    /// Create a new publisher
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventPublisher for RedisEventPublisher {
    async fn publish(&self, event: &ContentEvent) -> Result<(), PublishError> {
        let subject = event.subject();
        let payload = event.encode()?;

        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| PublishError::Transport(e.to_string()))?;

        // PUBLISH returns once Redis accepts the message; subscriber count is
        // only interesting for diagnostics.
        let receivers: u32 = conn
            .publish(subject.name(), payload.as_slice())
            .await
            .map_err(|e| PublishError::Transport(e.to_string()))?;

        tracing::debug!(
            subject = %subject,
            receivers = receivers,
            "Published event"
        );

        Ok(())
    }
}
