//! Startup provisioning of the first admin account.

use harva_core::error::CoreError;
use harva_core::roles::ROLE_ADMIN;
use harva_db::models::user::CreateUser;
use harva_db::repositories::UserRepo;
use harva_db::store::ContentStore;

use crate::auth::password::{hash_password, validate_password_strength, MIN_PASSWORD_LENGTH};
use crate::config::AdminBootstrap;
use crate::error::{AppError, AppResult};

/// Create the admin user unless a user with that email already exists.
///
/// Returns `true` when a user was created.
pub async fn ensure_admin(store: &dyn ContentStore, admin: &AdminBootstrap) -> AppResult<bool> {
    let email = admin.email.trim();

    if UserRepo::find_by_email(store, email).await?.is_some() {
        tracing::debug!(email, "Admin user already present");
        return Ok(false);
    }

    validate_password_strength(&admin.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let password_hash = hash_password(&admin.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        store,
        &CreateUser {
            email: email.to_string(),
            full_name: None,
            password_hash,
            role: ROLE_ADMIN.to_string(),
        },
    )
    .await?;

    tracing::info!(user_id = %user.id, email, "Created admin user");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use harva_db::store::MemoryStore;

    use super::*;

    fn admin(password: &str) -> AdminBootstrap {
        AdminBootstrap {
            email: "admin@harva.test".into(),
            password: password.into(),
        }
    }

    #[tokio::test]
    async fn test_creates_admin_once() {
        let store = MemoryStore::new();

        assert!(ensure_admin(&store, &admin("long-enough-pw")).await.unwrap());
        assert!(!ensure_admin(&store, &admin("long-enough-pw")).await.unwrap());

        let user = UserRepo::find_by_email(&store, "admin@harva.test")
            .await
            .unwrap()
            .expect("admin should exist");
        assert_eq!(user.role, ROLE_ADMIN);
        assert!(user.password_hash.starts_with("$argon2id$"));
    }

    #[tokio::test]
    async fn test_rejects_short_password() {
        let store = MemoryStore::new();
        assert_matches!(
            ensure_admin(&store, &admin("short")).await,
            Err(AppError::Core(CoreError::Validation(_)))
        );
        assert!(store.rows("cms_users").await.is_empty());
    }
}
