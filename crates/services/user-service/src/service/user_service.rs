//! User service - Handles user-related use cases.
//!
//! The repository sits behind a single lock, so every operation sees both
//! store views in a consistent state even when the service is shared.

use async_trait::async_trait;
use tokio::sync::RwLock;

use common::{AppError, AppResult, OptionExt};
use domain::{UpdateUser, User, UserId, UserRole};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Add a user. A duplicate id is ignored, not reported.
    async fn add_user(&self, user: User) -> AppResult<()>;

    /// Get user by ID
    async fn get_user(&self, id: UserId) -> AppResult<User>;

    /// List all users in insertion order
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// List active users
    async fn list_active_users(&self) -> AppResult<Vec<User>>;

    /// List inactive users
    async fn list_inactive_users(&self) -> AppResult<Vec<User>>;

    /// List users holding a role
    async fn list_users_by_role(&self, role: UserRole) -> AppResult<Vec<User>>;

    /// Activate or deactivate a user
    async fn set_user_active(&self, id: UserId, active: bool) -> AppResult<()>;

    /// Update user details
    async fn update_user(&self, id: UserId, changes: UpdateUser) -> AppResult<User>;

    /// Remove user, returning the removed record
    async fn remove_user(&self, id: UserId) -> AppResult<User>;

    /// Number of stored users
    async fn count_users(&self) -> usize;

    /// Check store consistency
    async fn verify(&self) -> AppResult<()>;
}

/// Concrete implementation of UserService over any repository.
pub struct UserManager<R: UserRepository> {
    repo: RwLock<R>,
}

impl<R: UserRepository> UserManager<R> {
    /// Create new user service instance with repository
    pub fn new(repo: R) -> Self {
        Self {
            repo: RwLock::new(repo),
        }
    }
}

#[async_trait]
impl<R: UserRepository> UserService for UserManager<R> {
    async fn add_user(&self, user: User) -> AppResult<()> {
        let id = user.id();
        if !self.repo.write().await.insert(user) {
            tracing::debug!(user_id = id, "User already exists, keeping stored record");
        }
        Ok(())
    }

    async fn get_user(&self, id: UserId) -> AppResult<User> {
        self.repo.read().await.get(id).ok_or_not_found()
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        Ok(self.repo.read().await.all())
    }

    async fn list_active_users(&self) -> AppResult<Vec<User>> {
        Ok(self.repo.read().await.active())
    }

    async fn list_inactive_users(&self) -> AppResult<Vec<User>> {
        Ok(self.repo.read().await.inactive())
    }

    async fn list_users_by_role(&self, role: UserRole) -> AppResult<Vec<User>> {
        Ok(self.repo.read().await.by_role(role))
    }

    async fn set_user_active(&self, id: UserId, active: bool) -> AppResult<()> {
        if self.repo.write().await.set_active(id, active) {
            Ok(())
        } else {
            Err(AppError::NotFound)
        }
    }

    async fn update_user(&self, id: UserId, changes: UpdateUser) -> AppResult<User> {
        self.repo.write().await.update(id, changes).ok_or_not_found()
    }

    async fn remove_user(&self, id: UserId) -> AppResult<User> {
        let removed = self.repo.write().await.delete(id).ok_or_not_found()?;
        tracing::info!(user_id = id, "User removed");
        Ok(removed)
    }

    async fn count_users(&self) -> usize {
        self.repo.read().await.count()
    }

    async fn verify(&self) -> AppResult<()> {
        self.repo.read().await.verify()
    }
}
