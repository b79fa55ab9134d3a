use anyhow::Context;
use sqlx::SqlitePool;
use tokio::task::spawn_blocking;
use tracing::{info, warn};

use crate::auth::{
    dto::{LoginForm, RegisterForm},
    error::{AuthError, ValidationError},
    password::{hash_password, verify_password},
    repo_types::User,
};

pub const MIN_PASSWORD_LEN: usize = 8;

/// Length is checked before equality, so a short mismatched pair reports "too short".
pub(crate) fn validate_new_password(
    password: &str,
    repeat_password: &str,
) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    if password != repeat_password {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

/// Creates the user. Email uniqueness is left to the store's constraint.
pub async fn register(db: &SqlitePool, form: &RegisterForm) -> Result<User, AuthError> {
    if let Err(e) = validate_new_password(&form.password, &form.repeat_password) {
        warn!(email = %form.email, reason = ?e, "registration rejected");
        return Err(e.into());
    }

    let plain = form.password.clone();
    let hash = spawn_blocking(move || hash_password(&plain))
        .await
        .context("password hashing task")??;

    let user = match User::create(db, &form.name, &form.email, &hash).await {
        Ok(u) => u,
        Err(e) => {
            let err = AuthError::from(e);
            if matches!(err, AuthError::DuplicateEmail) {
                warn!(email = %form.email, "email already registered");
            }
            return Err(err);
        }
    };

    info!(user_id = user.id, email = %user.email, "user registered");
    Ok(user)
}

/// Unknown emails are verified against a dummy hash, so both failure
/// paths cost one Argon2 run and look the same to the caller.
pub async fn login(db: &SqlitePool, form: &LoginForm) -> Result<User, AuthError> {
    let user = User::find_by_email(db, &form.email).await?;

    let plain = form.password.clone();
    let stored = user.as_ref().map(|u| u.password_hash.clone());
    let matched = spawn_blocking(move || verify_password(&plain, stored.as_deref()))
        .await
        .context("password verification task")?;

    match user {
        Some(user) if matched => {
            info!(user_id = user.id, email = %user.email, "user logged in");
            Ok(user)
        }
        Some(user) => {
            warn!(email = %form.email, user_id = user.id, "login invalid password");
            Err(AuthError::Authentication)
        }
        None => {
            warn!(email = %form.email, "login unknown email");
            Err(AuthError::Authentication)
        }
    }
}
