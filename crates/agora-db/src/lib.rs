//! # agora-db
//!
//! Database layer implementing the `agora-core` port traits with PostgreSQL
//! via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations owning the uniqueness and atomicity
//!   guarantees of the interaction pipeline
//!
//! ## Usage
//!
//! ```rust,ignore
//! use agora_db::pool::{create_pool, DatabaseConfig};
//! use agora_db::PgReactionRepository;
//! use agora_core::traits::ReactionRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let reactions = PgReactionRepository::new(pool);
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{
    PgContentLookup, PgNotificationRepository, PgPollRepository, PgReactionRepository,
    PgUserDirectory,
};
