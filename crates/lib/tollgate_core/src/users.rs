//! User lookup.
//!
//! The HTTP layer resolves usernames through the [`UserStore`] trait so tests
//! can swap the backing table without touching the handlers.

use std::collections::HashMap;

use crate::auth::AuthError;
use crate::auth::password::hash_password;
use crate::models::{Role, User};

/// Read-only username → user lookup.
pub trait UserStore: Send + Sync {
    /// Fetch a user by username.
    fn find_user(&self, username: &str) -> Option<User>;
}

/// In-memory user table, read-only after construction.
#[derive(Debug, Default)]
pub struct InMemoryUsers {
    users: HashMap<String, User>,
}

impl InMemoryUsers {
    /// Build a store from an explicit user list.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: users
                .into_iter()
                .map(|u| (u.username.clone(), u))
                .collect(),
        }
    }

    /// The demo user table: `user1` (user) and `admin` (admin).
    ///
    /// Passwords are bcrypt-hashed at startup; the table is never mutated
    /// afterwards.
    pub fn seeded() -> Result<Self, AuthError> {
        Ok(Self::with_users([
            User {
                username: "user1".into(),
                password_hash: hash_password("password123")?,
                role: Role::User,
            },
            User {
                username: "admin".into(),
                password_hash: hash_password("admin123")?,
                role: Role::Admin,
            },
        ]))
    }
}

impl UserStore for InMemoryUsers {
    fn find_user(&self, username: &str) -> Option<User> {
        self.users.get(username).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::password::verify_password;

    #[test]
    fn seeded_table_has_demo_users() {
        let store = InMemoryUsers::seeded().unwrap();

        let user = store.find_user("user1").unwrap();
        assert_eq!(user.role, Role::User);
        assert!(verify_password("password123", &user.password_hash).unwrap());

        let admin = store.find_user("admin").unwrap();
        assert_eq!(admin.role, Role::Admin);

        assert!(store.find_user("nobody").is_none());
    }
}
