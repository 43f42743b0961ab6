//! Nodestrap - node container startup lifecycle controller
//!
//! Nodestrap is the entrypoint of a node container image. On every start it
//! resolves its configuration from the environment, checks whether the node's
//! persistent state store has already been initialized, performs a one-time
//! bootstrap from the genesis configuration if it has not, and then replaces
//! itself with the node's long-running service process.
//!
//! # Core Concepts
//!
//! - **Marker-keyed idempotency**: the `db` subpath inside the data directory
//!   is the sole signal that bootstrap already ran
//! - **One writer per data directory**: the initialized check and bootstrap
//!   are not synchronized across container instances; pointing two instances
//!   at the same data directory is a deployment error
//! - **No supervision**: after handoff the node process *is* the container;
//!   its exit status is the container's exit status
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and passthrough arguments
//! - [`config`] - Environment-resolved configuration
//! - [`store`] - State store initialization probe
//! - [`lifecycle`] - Bootstrap and start sequencing

pub mod cli;
pub mod config;
pub mod lifecycle;
pub mod store;

// Re-export commonly used types
pub use cli::Cli;
pub use config::Config;
pub use lifecycle::{LifecycleError, bootstrap_args, start_args};
pub use store::is_initialized;
