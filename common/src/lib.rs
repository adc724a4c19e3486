//! # Rentr Common
//!
//! Pieces shared by every layer of the workspace:
//! * **[`config`]**: runtime switches parsed from the command line.
//! * **[`log`]**: status macros (`info!`, `success!`, `warn!`) on top of `tracing`.

pub mod config;
pub mod log;

#[doc(hidden)]
pub use tracing;
