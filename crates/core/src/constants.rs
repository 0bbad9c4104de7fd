//! Shared constants for landfall.

/// Largest page a caller may request.
pub const MAX_PAGE_SIZE: u32 = 1000;

/// Page size used by the CLI when none is given.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Per-stage datastore timeout in milliseconds.
pub const DEFAULT_STAGE_TIMEOUT_MS: u64 = 10_000;

/// SQLite connection pool: default size.
pub const DEFAULT_DB_POOL_SIZE: u32 = 8;

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 20;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// Maximum number of records accepted by one upload request.
pub const MAX_UPLOAD_RECORDS: usize = 50_000;

/// Port the HTTP server listens on by default.
pub const DEFAULT_HTTP_PORT: u16 = 5253;

/// Name stored for storms that were never named.
pub const UNNAMED_STORM: &str = "UNNAMED";

/// Number of leading characters of a date string that carry meaning.
pub const DATE_DISPLAY_LEN: usize = 10;
