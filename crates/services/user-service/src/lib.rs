//! User Service Library
//!
//! In-memory user registry: a dual-indexed store that keeps users both in
//! insertion order and keyed by id, plus an async service over it.

pub mod config;
pub mod demo;
pub mod repository;
pub mod seed;
pub mod service;

use tracing::info;

use crate::config::UserServiceConfig;
use crate::repository::UserStore;
use crate::service::UserManager;

/// Build a store sized and seeded according to `config`.
pub fn build_store(config: &UserServiceConfig) -> UserStore {
    let mut store = UserStore::with_capacity(config.capacity);
    if config.seed {
        for user in seed::demo_users() {
            store.add(user);
        }
        info!(count = store.count(), "Seeded demo users");
    }
    store
}

/// Build the user service over a freshly configured store.
pub fn build_manager(config: &UserServiceConfig) -> UserManager<UserStore> {
    UserManager::new(build_store(config))
}
