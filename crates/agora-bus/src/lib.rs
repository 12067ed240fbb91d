//! # agora-bus
//!
//! Redis transport layer for content events.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **Publisher**: Fire-and-forget event publishing, one channel per subject
//! - **Subscriber**: Background listener with reconnection and broadcast fan-out
//!
//! ## Example
//!
//! ```ignore
//! use agora_bus::{RedisPool, RedisPoolConfig, RedisEventPublisher, SubscriberBuilder};
//! use agora_core::events::{ContentEvent, PostLiked};
//!
//! let pool = RedisPool::new(RedisPoolConfig::default())?;
//! let publisher = RedisEventPublisher::new(pool);
//!
//! let subscriber = SubscriberBuilder::new()
//!     .redis_url("redis://127.0.0.1:6379")
//!     .subscribe_all()
//!     .build()
//!     .await?;
//! let mut rx = subscriber.receiver();
//! ```

pub mod pool;
pub mod pubsub;

// Re-export pool types
pub use pool::{
    create_shared_pool, RedisPool, RedisPoolConfig, RedisPoolError, RedisResult, SharedRedisPool,
};

// Re-export pubsub types
pub use pubsub::{
    ReceivedMessage, RedisEventPublisher, Subscriber, SubscriberBuilder, SubscriberConfig,
    SubscriberError, SubscriberResult,
};
