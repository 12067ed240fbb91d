//! User profile - the read-only view the core needs of a user

use uuid::Uuid;

/// Minimal user projection returned by the `UserDirectory` port.
///
/// The core never owns user rows; it only reads enough to enrich
/// notifications with a display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: Uuid,
    pub username: String,
}
