//! Slash command implementations organized by category.

/// Admin-only configuration commands
pub mod admin;

/// Conversion commands
pub mod convert;

/// Statistics command
pub mod stats;

// Export commands
pub use admin::*;
pub use convert::*;
pub use stats::*;
