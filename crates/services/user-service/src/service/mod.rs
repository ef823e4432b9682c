//! Service layer - User use cases on top of a repository.

mod user_service;

pub use user_service::{UserManager, UserService};
