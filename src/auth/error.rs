use thiserror::Error;

pub const PASSWORD_TOO_SHORT_MESSAGE: &str = "Password must be at least 8 characters";
pub const PASSWORD_UNMATCH_MESSAGE: &str = "Passwords did not match!";
pub const EMAIL_ALREADY_EXISTS_MESSAGE: &str = "Email already exists! Try a different one";
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials! Try again";

/// Bad input shape on registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", PASSWORD_TOO_SHORT_MESSAGE)]
    PasswordTooShort,
    #[error("{}", PASSWORD_UNMATCH_MESSAGE)]
    PasswordMismatch,
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{}", EMAIL_ALREADY_EXISTS_MESSAGE)]
    DuplicateEmail,
    /// Unknown email and wrong password both map here.
    #[error("{}", INVALID_CREDENTIALS_MESSAGE)]
    Authentication,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AuthError {
    /// Message safe to show in a form, `None` for internal failures.
    pub fn user_message(&self) -> Option<String> {
        match self {
            AuthError::Internal(_) => None,
            other => Some(other.to_string()),
        }
    }
}

impl From<sqlx::Error> for AuthError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AuthError::DuplicateEmail
            }
            other => AuthError::Internal(other.into()),
        }
    }
}
