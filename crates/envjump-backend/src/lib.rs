//! # envjump-backend - External Collaborators
//!
//! The popup talks to two things it does not own: the persistent store
//! holding environments and the language preference, and the executor that
//! opens an environment's tabs. Both sit behind capability traits so the
//! controller in `envjump-app` can be built and tested without either.
//!
//! Depends on [`envjump_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### Store
//! - [`KeyValueStore`] - Async read access to stored keys
//! - [`JsonFileStore`] - Store backed by a JSON document on disk
//!
//! ### Executor
//! - [`ExecutionBackend`] - Sends a launch request and returns the reply
//! - [`ProcessBackend`] - Spawns an executor program per request

pub mod executor;
pub mod store;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use executor::{ExecutionBackend, ProcessBackend};
pub use store::{JsonFileStore, KeyValueStore, StoreValues, ENVIRONMENTS_KEY, LANGUAGE_KEY};
