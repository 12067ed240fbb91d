//! Redis Pub/Sub module.
//!
//! One Redis channel per event subject; the publisher writes to it and the
//! subscriber fans received messages out over a broadcast channel.

mod publisher;
mod subscriber;

pub use publisher::RedisEventPublisher;
pub use subscriber::{
    ReceivedMessage, Subscriber, SubscriberBuilder, SubscriberConfig, SubscriberError,
    SubscriberResult,
};
