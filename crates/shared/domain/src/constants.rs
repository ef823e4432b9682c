//! Domain-level constants.
//!
//! These constants define the fixed role catalogue.

// =============================================================================
// User Roles
// =============================================================================

/// Administrator role with elevated privileges
pub const ROLE_ADMIN: &str = "admin";

/// Regular user role
pub const ROLE_USER: &str = "user";

/// Guest role with minimal access
pub const ROLE_GUEST: &str = "guest";

// =============================================================================
// Role Descriptions
// =============================================================================

pub const ROLE_ADMIN_DESCRIPTION: &str = "Administrator";

pub const ROLE_USER_DESCRIPTION: &str = "Regular user";

pub const ROLE_GUEST_DESCRIPTION: &str = "Guest";
