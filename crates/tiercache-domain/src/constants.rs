//! Domain layer constants

// ============================================================================
// PATTERN CONSTANTS
// ============================================================================

/// Character that switches an expire pattern from exact deletion to glob matching
pub const WILDCARD: char = '*';

// ============================================================================
// BACKEND IDENTIFIERS
// ============================================================================

/// Scheme of the in-process TTL store
pub const MEMORY_SCHEME: &str = "memory";

/// Scheme of the remote Redis-backed store
pub const REDIS_SCHEME: &str = "redis";

/// Scheme of the remote Redis-backed store over TLS
pub const REDIS_TLS_SCHEME: &str = "rediss";

/// Scheme of the two-tier store (in-process in front of Redis)
pub const TIERED_SCHEME: &str = "mem+redis";

/// Scheme of the two-tier store over TLS
pub const TIERED_TLS_SCHEME: &str = "mem+rediss";

/// Separator between the local and remote parts of a composite scheme
pub const TIERED_SCHEME_SEPARATOR: char = '+';

/// Name reported by the no-op backend
pub const NULL_ENGINE_NAME: &str = "null";

// ============================================================================
// CONNECTION STRING OPTIONS
// ============================================================================

/// Query option holding the sweep interval in seconds
pub const OPTION_SWEEP_INTERVAL: &str = "ttl";

/// Query option holding the snapshot file path
pub const OPTION_PERSIST: &str = "persist";

// ============================================================================
// SNAPSHOT CONSTANTS
// ============================================================================

/// Version tag written into every snapshot file
pub const SNAPSHOT_FORMAT_VERSION: u32 = 1;

/// Extension of the temporary file a snapshot is written to before rename
pub const SNAPSHOT_TMP_EXTENSION: &str = "tmp";
