//! Dual-indexed in-memory user store.
//!
//! Users live once in a map keyed by identifier; insertion order is kept as a
//! separate list of identifiers. Both views change together inside each
//! mutating call, so no caller can observe one without the other.

use std::collections::{HashMap, HashSet};

use common::{AppError, AppResult};
use domain::{UpdateUser, User, UserId, UserRole};

/// In-memory user collection with O(1) lookup and stable insertion order.
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    users: HashMap<UserId, User>,
    order: Vec<UserId>,
}

impl UserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with room for `capacity` users
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            users: HashMap::with_capacity(capacity),
            order: Vec::with_capacity(capacity),
        }
    }

    /// Add a user.
    ///
    /// If a user with the same identifier is already stored this does
    /// nothing: the stored user is neither replaced nor duplicated.
    pub fn add(&mut self, user: User) {
        let id = user.id();
        if self.users.contains_key(&id) {
            tracing::debug!(user_id = id, "Duplicate user id, add ignored");
            return;
        }

        self.order.push(id);
        self.users.insert(id, user);
        tracing::debug!(user_id = id, count = self.order.len(), "User added");
        self.debug_verify();
    }

    /// Look up a user by identifier
    pub fn find_by_id(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    /// Mutable access to a stored user, for in-place edits
    pub fn find_by_id_mut(&mut self, id: UserId) -> Option<&mut User> {
        self.users.get_mut(&id)
    }

    pub fn contains(&self, id: UserId) -> bool {
        self.users.contains_key(&id)
    }

    /// Iterate over all users in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &User> + '_ {
        self.order.iter().filter_map(move |id| self.users.get(id))
    }

    /// All users in insertion order
    pub fn list(&self) -> Vec<&User> {
        self.iter().collect()
    }

    /// Active users in insertion order
    pub fn list_active(&self) -> Vec<&User> {
        self.iter().filter(|user| user.is_active()).collect()
    }

    /// Inactive users in insertion order
    pub fn list_inactive(&self) -> Vec<&User> {
        self.iter().filter(|user| !user.is_active()).collect()
    }

    /// Users holding `role`, in insertion order
    pub fn list_by_role(&self, role: UserRole) -> Vec<&User> {
        self.iter().filter(|user| user.role() == role).collect()
    }

    /// Set the active flag of a stored user. Returns `false` if absent.
    pub fn set_active(&mut self, id: UserId, active: bool) -> bool {
        match self.users.get_mut(&id) {
            Some(user) => {
                user.set_active(active);
                tracing::debug!(user_id = id, active, "User status updated");
                true
            }
            None => false,
        }
    }

    /// Apply a partial update to a stored user. Returns `None` if absent.
    pub fn update(&mut self, id: UserId, changes: UpdateUser) -> Option<&User> {
        let user = self.users.get_mut(&id)?;
        user.apply(changes);
        tracing::debug!(user_id = id, "User updated");
        Some(&*user)
    }

    /// Remove a user from both views, returning it. Returns `None` if absent.
    ///
    /// The identifier is free for reuse afterwards.
    pub fn remove(&mut self, id: UserId) -> Option<User> {
        let user = self.users.remove(&id)?;
        if let Some(pos) = self.order.iter().position(|&stored| stored == id) {
            self.order.remove(pos);
        }

        tracing::debug!(user_id = id, count = self.order.len(), "User removed");
        self.debug_verify();
        Some(user)
    }

    /// Number of stored users
    pub fn count(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Check that the ordered view and the lookup hold exactly the same users.
    pub fn verify(&self) -> AppResult<()> {
        if self.order.len() != self.users.len() {
            return Err(AppError::invariant(format!(
                "ordered view holds {} ids but lookup holds {} users",
                self.order.len(),
                self.users.len()
            )));
        }

        let mut seen = HashSet::with_capacity(self.order.len());
        for id in &self.order {
            if !seen.insert(*id) {
                return Err(AppError::invariant(format!("id {} appears twice in ordered view", id)));
            }
            match self.users.get(id) {
                Some(user) if user.id() == *id => {}
                Some(user) => {
                    return Err(AppError::invariant(format!(
                        "lookup key {} maps to user {}",
                        id,
                        user.id()
                    )));
                }
                None => {
                    return Err(AppError::invariant(format!("id {} missing from lookup", id)));
                }
            }
        }

        Ok(())
    }

    fn debug_verify(&self) {
        debug_assert_eq!(
            self.order.len(),
            self.users.len(),
            "user store views diverged"
        );
    }
}
