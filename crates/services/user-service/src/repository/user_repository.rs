//! User repository trait and its in-memory implementation.

use common::AppResult;
use domain::{UpdateUser, User, UserId, UserRole};

use super::user_store::UserStore;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Reads hand out owned snapshots so callers never hold a borrow into the
/// store across a lock boundary.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait UserRepository: Send + Sync {
    /// Insert a user. Returns `false` when the id is already taken; nothing changes then.
    fn insert(&mut self, user: User) -> bool;

    /// Find user by ID
    fn get(&self, id: UserId) -> Option<User>;

    /// List all users in insertion order
    fn all(&self) -> Vec<User>;

    /// List active users in insertion order
    fn active(&self) -> Vec<User>;

    /// List inactive users in insertion order
    fn inactive(&self) -> Vec<User>;

    /// List users with the given role in insertion order
    fn by_role(&self, role: UserRole) -> Vec<User>;

    /// Set the active flag. Returns `false` if the user does not exist.
    fn set_active(&mut self, id: UserId, active: bool) -> bool;

    /// Update user fields
    fn update(&mut self, id: UserId, changes: UpdateUser) -> Option<User>;

    /// Remove user by ID, returning it
    fn delete(&mut self, id: UserId) -> Option<User>;

    /// Number of stored users
    fn count(&self) -> usize;

    /// Check internal consistency
    fn verify(&self) -> AppResult<()>;
}

fn snapshot(users: Vec<&User>) -> Vec<User> {
    users.into_iter().cloned().collect()
}

impl UserRepository for UserStore {
    fn insert(&mut self, user: User) -> bool {
        if self.contains(user.id()) {
            return false;
        }
        self.add(user);
        true
    }

    fn get(&self, id: UserId) -> Option<User> {
        self.find_by_id(id).cloned()
    }

    fn all(&self) -> Vec<User> {
        self.iter().cloned().collect()
    }

    fn active(&self) -> Vec<User> {
        snapshot(self.list_active())
    }

    fn inactive(&self) -> Vec<User> {
        snapshot(self.list_inactive())
    }

    fn by_role(&self, role: UserRole) -> Vec<User> {
        snapshot(self.list_by_role(role))
    }

    fn set_active(&mut self, id: UserId, active: bool) -> bool {
        UserStore::set_active(self, id, active)
    }

    fn update(&mut self, id: UserId, changes: UpdateUser) -> Option<User> {
        UserStore::update(self, id, changes).cloned()
    }

    fn delete(&mut self, id: UserId) -> Option<User> {
        self.remove(id)
    }

    fn count(&self) -> usize {
        UserStore::count(self)
    }

    fn verify(&self) -> AppResult<()> {
        UserStore::verify(self)
    }
}
