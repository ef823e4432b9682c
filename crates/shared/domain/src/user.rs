//! User domain entity and related types.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{
    ROLE_ADMIN, ROLE_ADMIN_DESCRIPTION, ROLE_GUEST, ROLE_GUEST_DESCRIPTION, ROLE_USER,
    ROLE_USER_DESCRIPTION,
};
use crate::error::DomainError;

/// Unique user identifier
pub type UserId = i64;

/// User roles enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
    Guest,
}

impl UserRole {
    /// Every role, in declaration order
    pub const ALL: [UserRole; 3] = [UserRole::Admin, UserRole::User, UserRole::Guest];

    /// Machine-readable role name
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => ROLE_ADMIN,
            UserRole::User => ROLE_USER,
            UserRole::Guest => ROLE_GUEST,
        }
    }

    /// Fixed human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            UserRole::Admin => ROLE_ADMIN_DESCRIPTION,
            UserRole::User => ROLE_USER_DESCRIPTION,
            UserRole::Guest => ROLE_GUEST_DESCRIPTION,
        }
    }
}

impl FromStr for UserRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserRole::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                DomainError::validation(format!(
                    "unknown role '{}' (expected one of: {}, {}, {})",
                    s.trim(),
                    ROLE_ADMIN,
                    ROLE_USER,
                    ROLE_GUEST
                ))
            })
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

fn default_active() -> bool {
    true
}

/// User domain entity.
///
/// The identifier is fixed at construction; everything else is mutable and
/// unvalidated. Two users are equal when their identifiers are equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    role: UserRole,
    #[serde(default = "default_active")]
    active: bool,
}

impl User {
    /// Create a new, active user
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>, role: UserRole) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            role,
            active: true,
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_role(&mut self, role: UserRole) {
        self.role = role;
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Apply a partial update in place
    pub fn apply(&mut self, changes: UpdateUser) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(email) = changes.email {
            self.email = email;
        }
        if let Some(role) = changes.role {
            self.role = role;
        }
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}

impl Hash for User {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.active { "active" } else { "inactive" };
        write!(
            f,
            "#{} {} <{}> [{}, {}]",
            self.id, self.name, self.email, self.role, status
        )
    }
}

/// User update data transfer object
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateUser {
    /// New display name
    pub name: Option<String>,
    /// New contact address
    pub email: Option<String>,
    /// New role
    pub role: Option<UserRole>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_is_active() {
        let user = User::new(1, "Alice", "alice@example.com", UserRole::Admin);
        assert!(user.is_active());
        assert_eq!(user.role(), UserRole::Admin);
        assert_eq!(user.name(), "Alice");
    }

    #[test]
    fn test_equality_is_by_id_only() {
        let a = User::new(7, "Alice", "alice@example.com", UserRole::Admin);
        let b = User::new(7, "Someone else", "other@example.com", UserRole::Guest);
        let c = User::new(8, "Alice", "alice@example.com", UserRole::Admin);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_setters_accept_anything() {
        let mut user = User::new(1, "Alice", "alice@example.com", UserRole::Admin);
        user.set_name("");
        user.set_email("");
        user.set_role(UserRole::Guest);
        user.set_active(false);

        assert_eq!(user.name(), "");
        assert_eq!(user.email(), "");
        assert_eq!(user.role(), UserRole::Guest);
        assert!(!user.is_active());
        assert_eq!(user.id(), 1);
    }

    #[test]
    fn test_apply_partial_update() {
        let mut user = User::new(2, "Bob", "bob@example.com", UserRole::User);
        user.apply(UpdateUser {
            name: Some("Robert".to_string()),
            role: Some(UserRole::Admin),
            ..Default::default()
        });

        assert_eq!(user.name(), "Robert");
        assert_eq!(user.email(), "bob@example.com");
        assert_eq!(user.role(), UserRole::Admin);
    }

    #[test]
    fn test_role_parse() {
        assert_eq!("admin".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert_eq!("GUEST".parse::<UserRole>().unwrap(), UserRole::Guest);
        assert!(matches!(
            "root".parse::<UserRole>(),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_role_descriptions() {
        assert_eq!(UserRole::Admin.description(), "Administrator");
        assert_eq!(UserRole::User.description(), "Regular user");
        assert_eq!(UserRole::Guest.description(), "Guest");
    }

    #[test]
    fn test_deserialize_defaults_active() {
        let user: User = serde_json::from_str(
            r#"{"id":3,"name":"Charlie","email":"charlie@example.com","role":"user"}"#,
        )
        .unwrap();

        assert!(user.is_active());
        assert_eq!(user.role(), UserRole::User);
    }

    #[test]
    fn test_display() {
        let mut user = User::new(1, "Alice", "alice@example.com", UserRole::Admin);
        assert_eq!(user.to_string(), "#1 Alice <alice@example.com> [admin, active]");
        user.set_active(false);
        assert_eq!(user.to_string(), "#1 Alice <alice@example.com> [admin, inactive]");
    }
}
