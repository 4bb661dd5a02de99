//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via `tracing`
//! - Events go to stderr; stdout belongs to the daemon after hand-off
//! - `RUST_LOG` takes precedence over the configured level

pub mod logging;

pub use logging::init_logging;
