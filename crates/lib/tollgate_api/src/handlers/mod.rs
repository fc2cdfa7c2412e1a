//! Request handlers.

pub mod auth;
pub mod delegated;
pub mod resources;
