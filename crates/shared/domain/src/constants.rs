//! Domain-level constants.

// =============================================================================
// Lookup Errors
// =============================================================================

/// Message carried by the not-found error of single-user lookups
pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";

// =============================================================================
// Routing
// =============================================================================

/// Base path under which user lookups are mounted
pub const USERS_BASE_PATH: &str = "/api/users";
