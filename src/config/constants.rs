//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Roles
// =============================================================================

/// Display label for addresses with no registry entry
pub const LABEL_UNREGISTERED: &str = "Unregistered";

/// Display label for the manager role
pub const LABEL_MANAGER: &str = "Manager";

/// Display label for the seller role
pub const LABEL_SELLER: &str = "Seller";

/// Display label for the supplier role
pub const LABEL_SUPPLIER: &str = "Supplier";

/// Sentinel display name returned when a role lookup fails or the
/// address has no registry entry
pub const UNREGISTERED_DISPLAY_NAME: &str = "Unregistered User";

/// Fallback display name for registered users with a blank name field
pub const UNKNOWN_USER_DISPLAY_NAME: &str = "Unknown User";

// =============================================================================
// Product status
// =============================================================================

/// Display label for a freshly created product
pub const LABEL_CREATED: &str = "Created";

/// Display label for a product awaiting supplier approvals
pub const LABEL_PENDING: &str = "Pending";

/// Display label for a fully approved product
pub const LABEL_APPROVED: &str = "Approved";

/// Display label for a rejected product
pub const LABEL_REJECTED: &str = "Rejected";

/// Display label for a status code outside the contract's enumeration
pub const LABEL_UNKNOWN: &str = "Unknown";

// =============================================================================
// Address display
// =============================================================================

/// Leading characters (including the 0x prefix) kept in the truncated
/// address form, e.g. "0x1234...abcd"
pub const ADDRESS_SHORT_PREFIX_LEN: usize = 6;

/// Trailing characters kept in the truncated address form
pub const ADDRESS_SHORT_SUFFIX_LEN: usize = 4;

// =============================================================================
// Fan-out
// =============================================================================

/// Default cap on concurrent per-product detail reads
pub const DEFAULT_MAX_CONCURRENT_READS: usize = 16;

// =============================================================================
// Local files
// =============================================================================

/// Default registry snapshot consumed by the fixture reader
pub const DEFAULT_SNAPSHOT_PATH: &str = "snapshot.json";

/// Default location of the persisted wallet session
pub const DEFAULT_SESSION_PATH: &str = ".foodtrace-session.json";
