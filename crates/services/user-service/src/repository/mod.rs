//! Repository layer for data access.

mod user_repository;
mod user_store;

pub use user_repository::UserRepository;
pub use user_store::UserStore;

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
