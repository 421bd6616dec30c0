//! Well-known role name constants.
//!
//! These must match the `role` check constraint on `cms_users`.

use crate::error::CoreError;

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_EDITOR: &str = "editor";
pub const ROLE_VIEWER: &str = "viewer";

/// Every role a CMS user may hold.
pub const VALID_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_EDITOR, ROLE_VIEWER];

/// Returns `true` if the role may write section content.
pub fn can_edit(role: &str) -> bool {
    role == ROLE_ADMIN || role == ROLE_EDITOR
}

/// Validate that a role name is one of [`VALID_ROLES`].
pub fn validate_role(role: &str) -> Result<(), CoreError> {
    if VALID_ROLES.contains(&role) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid role '{role}'. Must be one of: {}",
            VALID_ROLES.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_and_editor_can_edit() {
        assert!(can_edit(ROLE_ADMIN));
        assert!(can_edit(ROLE_EDITOR));
    }

    #[test]
    fn test_viewer_cannot_edit() {
        assert!(!can_edit(ROLE_VIEWER));
        assert!(!can_edit(""));
        assert!(!can_edit("Admin"));
    }

    #[test]
    fn test_validate_role() {
        assert!(validate_role("viewer").is_ok());
        let msg = validate_role("owner").unwrap_err().to_string();
        assert!(msg.contains("owner"));
    }
}
