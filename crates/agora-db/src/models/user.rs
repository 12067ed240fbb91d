//! User reference model

use sqlx::FromRow;
use uuid::Uuid;

/// Read-only projection of the users table (owned by the user service)
#[derive(Debug, Clone, FromRow)]
pub struct UserRefModel {
    pub id: Uuid,
    pub username: String,
}
