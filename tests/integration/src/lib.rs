//! Integration test utilities for the content interaction pipeline
//!
//! Provides in-memory implementations of every port so the service layer
//! and dispatcher can be exercised end to end without PostgreSQL or Redis.

pub mod fakes;
pub mod fixtures;

pub use fakes::*;
pub use fixtures::*;
