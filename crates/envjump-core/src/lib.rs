//! # envjump-core - Core Domain Types
//!
//! Foundation crate for envjump. Provides domain types, the backend wire
//! protocol, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Environments`] - Environment name to URL list mapping
//! - [`PendingCommand`] - Command forwarded with every launch
//! - [`SelectionOutcome`] - Result of a dispatch attempt
//!
//! ### Protocol (`protocol`)
//! - [`LaunchRequest`] - Outbound `executeMainFunction` message
//! - [`LaunchReply`] - Inbound `{ success }` reply
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use envjump_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod protocol;
pub mod types;

/// Prelude for common imports used throughout all envjump crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use protocol::{reply_succeeded, LaunchReply, LaunchRequest, EXECUTE_MAIN_FUNCTION};
pub use types::{EnvironmentName, Environments, PendingCommand, SelectionOutcome};
