//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Collect input → Validate → Render config → Register host
//!
//! Hand-off (handoff.rs):
//!     exec daemon command → process image replaced
//! ```
//!
//! # Design Decisions
//! - Ordered startup: nothing is written before validation passes
//! - The daemon inherits the environment and the PID

pub mod handoff;
pub mod startup;

pub use handoff::{DaemonCommand, ExecHandoff, Handoff, HandoffError};
pub use startup::{Entrypoint, Inputs, Stage};
