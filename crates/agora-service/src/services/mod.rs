//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod context;
pub mod dispatcher;
pub mod error;
pub mod notification;
pub mod poll;
pub mod reaction;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use dispatcher::EventDispatcher;
pub use error::{ServiceError, ServiceResult};
pub use notification::NotificationService;
pub use poll::PollService;
pub use reaction::ReactionService;
