//! CMS user model and DTOs.

use harva_core::types::{RowId, Timestamp};
use serde::{Deserialize, Serialize};

/// Full user row from the `cms_users` table.
///
/// Contains the password hash -- never serialized. Use [`UserResponse`] for
/// external-facing output.
#[derive(Debug, Clone, Deserialize)]
pub struct CmsUser {
    pub id: RowId,
    pub email: String,
    pub full_name: Option<String>,
    pub password_hash: String,
    pub role: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: RowId,
    pub email: String,
    pub full_name: Option<String>,
    pub role: String,
}

impl From<&CmsUser> for UserResponse {
    fn from(user: &CmsUser) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            full_name: user.full_name.clone(),
            role: user.role.clone(),
        }
    }
}

/// DTO for creating a new user. The password is already hashed.
#[derive(Debug, Clone, Serialize)]
pub struct CreateUser {
    pub email: String,
    pub full_name: Option<String>,
    pub password_hash: String,
    pub role: String,
}
