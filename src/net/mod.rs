//! Network identity subsystem.
//!
//! # Data Flow
//! ```text
//! --ip / --fqdn
//!     → identity.rs (address parsing, FQDN charset)
//!     → hosts.rs (append "<ip> <fqdn>" to the hosts table)
//! ```

pub mod hosts;
pub mod identity;

pub use hosts::{register_host, HostsError, HostsRegistrar};
pub use identity::NetworkIdentity;
