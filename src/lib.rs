//! MongoDB container entrypoint library.
//!
//! Validates user-supplied parameters, renders the mongod configuration from
//! a template, registers the node in the hosts table and hands the process
//! over to the daemon.

pub mod config;
pub mod error;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod params;
pub mod render;

pub use config::schema::EntrypointConfig;
pub use error::EntrypointError;
pub use lifecycle::{Entrypoint, ExecHandoff, Handoff, Inputs};
pub use net::NetworkIdentity;
