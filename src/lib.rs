//! "Hello Vibe!" HTTP service and its test harness.
//!
//! The service exposes a single route:
//!
//! ```text
//! GET /api/hello  ->  200 application/json  {"message":"Hello Vibe!"}
//! ```
//!
//! Any other path answers 404 with a JSON error body. The handler holds no
//! state, so every call returns the same bytes.
//!
//! # Modules
//!
//! - [`api`]: Router and handlers
//! - [`harness`]: Response verification and the network probe
//! - [`server`]: Listener binding and serving
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`metrics`]: Request metrics
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod harness;
pub mod metrics;
pub mod server;
pub mod utils;

pub use config::Config;
pub use error::{HarnessError, Result, ServiceError};
