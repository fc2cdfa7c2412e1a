//! # tollgate_core
//!
//! Core domain logic for Tollgate.

pub mod auth;
pub mod idp;
pub mod models;
pub mod users;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_not_empty() {
        assert!(!version().is_empty());
    }
}
