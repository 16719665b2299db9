//! Server constants

/// Error marker returned in the body of a failed search
pub const SEARCH_FAILED_MESSAGE: &str = "Search failed";

/// Header carrying the caller's locale preferences
pub const HEADER_ACCEPT_LANGUAGE: &str = "Accept-Language";

/// Health status when the engine answers
pub const HEALTH_STATUS_OK: &str = "ok";

/// Health status when the engine check fails
pub const HEALTH_STATUS_UNAVAILABLE: &str = "unavailable";

/// Methods allowed by the CORS fairing
pub const CORS_ALLOWED_METHODS: &str = "GET, OPTIONS";
