//! Top-level error for the entrypoint pipeline.

use thiserror::Error;

use crate::config::ConfigError;
use crate::lifecycle::handoff::HandoffError;
use crate::lifecycle::startup::Stage;
use crate::net::hosts::HostsError;
use crate::params::registry::RegistryError;
use crate::params::validator::ValidationError;
use crate::render::template::RenderError;

/// Any failure that ends the run.
#[derive(Debug, Error)]
pub enum EntrypointError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Hosts(#[from] HostsError),

    #[error(transparent)]
    Handoff(#[from] HandoffError),
}

impl EntrypointError {
    /// Stage in which the error was raised.
    pub fn stage(&self) -> Stage {
        match self {
            EntrypointError::Config(_) | EntrypointError::Registry(_) => Stage::CollectingInput,
            EntrypointError::Validation(_) => Stage::Validating,
            EntrypointError::Render(_) => Stage::Rendering,
            EntrypointError::Hosts(_) => Stage::RegisteringHost,
            EntrypointError::Handoff(_) => Stage::HandingOff,
        }
    }

    /// sysexits(3) status for the process.
    pub fn exit_code(&self) -> u8 {
        match self {
            EntrypointError::Config(_) | EntrypointError::Registry(_) => 78, // EX_CONFIG
            EntrypointError::Validation(_) => 65,                            // EX_DATAERR
            EntrypointError::Render(_) | EntrypointError::Hosts(_) => 74,    // EX_IOERR
            EntrypointError::Handoff(_) => 71,                               // EX_OSERR
        }
    }
}
