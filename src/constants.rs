//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8000;

/// Default origin allowed by the CORS layer (the web frontend's dev server)
pub const DEFAULT_CORS_ALLOWED_ORIGIN: &str = "http://localhost:5173";

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

/// Seconds to wait for a pooled connection before failing the request
pub const DATABASE_ACQUIRE_TIMEOUT_SECS: u64 = 5;

// =============================================================================
// AUTHENTICATION DEFAULTS
// =============================================================================

/// Default JWT token expiry in hours
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: u64 = 6;

/// Maximum password length
pub const MAX_PASSWORD_LENGTH: u64 = 128;

/// Length of the throwaway secret given to self-registered accounts
pub const GENERATED_SECRET_LENGTH: usize = 32;

// =============================================================================
// PAGINATION
// =============================================================================

/// Default page size for list endpoints
pub const DEFAULT_PAGE_SIZE: i64 = 100;

/// Maximum page size for list endpoints
pub const MAX_PAGE_SIZE: i64 = 500;

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum length of names, emails, locations and institutions
pub const MAX_NAME_LENGTH: u64 = 100;

/// Maximum registration category length
pub const MAX_CATEGORY_LENGTH: u64 = 50;

/// Maximum problem link length
pub const MAX_LINK_LENGTH: u64 = 200;

/// Maximum competition description length
pub const MAX_DESCRIPTION_LENGTH: u64 = 65535;

/// Largest money or duration value a `NUMERIC(10, 2)` column holds, in hundredths
pub const MAX_AMOUNT_CENTS: i64 = 9_999_999_999;

// =============================================================================
// STATIC DATA
// =============================================================================

/// Universities offered by the registration form
pub const UNIVERSITIES: &[&str] = &[
    "Universidade de São Paulo (USP)",
    "Universidade Estadual de Campinas (UNICAMP)",
    "Universidade Federal do Rio de Janeiro (UFRJ)",
    "Universidade Federal de Minas Gerais (UFMG)",
    "Universidade Federal do Rio Grande do Sul (UFRGS)",
    "Universidade de Brasília (UnB)",
];
