//! Authentication and authorization logic.
//!
//! Provides password hashing, token signing and verification, shared
//! between `tollgate_api` and the server binary.

pub mod jwt;
pub mod password;

use thiserror::Error;

/// Authentication errors.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    Credentials,

    #[error("Token is missing")]
    MissingToken,

    #[error("Token has expired")]
    ExpiredToken,

    #[error("Invalid token")]
    InvalidToken,

    #[error("User not found")]
    UnknownUser,

    #[error("Internal error: {0}")]
    Internal(String),
}
