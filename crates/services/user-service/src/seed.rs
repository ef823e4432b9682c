//! Demo seed data.

use domain::{User, UserRole};

/// The three users every demo store starts with
pub fn demo_users() -> Vec<User> {
    vec![
        User::new(1, "Alice", "alice@example.com", UserRole::Admin),
        User::new(2, "Bob", "bob@example.com", UserRole::User),
        User::new(3, "Charlie", "charlie@example.com", UserRole::User),
    ]
}
