//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from a TOML file.
//! Every section has defaults matching the stock MongoDB image, so an empty
//! file (or no file at all) yields a working configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::params::constraint::MatchMode;

/// Root configuration for the entrypoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EntrypointConfig {
    /// Template, output and hosts file locations.
    pub paths: PathsConfig,

    /// Hosts table handling.
    pub hosts: HostsConfig,

    /// Value validation settings.
    pub validation: ValidationConfig,

    /// Command the process is replaced with.
    pub daemon: DaemonConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Declared template parameters.
    pub parameters: Vec<ParameterSpec>,
}

impl Default for EntrypointConfig {
    fn default() -> Self {
        Self {
            paths: PathsConfig::default(),
            hosts: HostsConfig::default(),
            validation: ValidationConfig::default(),
            daemon: DaemonConfig::default(),
            observability: ObservabilityConfig::default(),
            parameters: default_parameters(),
        }
    }
}

/// File locations.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Template read once at startup.
    pub template: PathBuf,

    /// Rendered configuration, overwritten each run.
    pub config: PathBuf,

    /// Host resolution table, appended to.
    pub hosts: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            template: PathBuf::from("/etc/mongod.conf.template"),
            config: PathBuf::from("/etc/mongod.conf"),
            hosts: PathBuf::from("/etc/hosts"),
        }
    }
}

/// Hosts table configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct HostsConfig {
    /// Create the hosts file if it does not exist.
    pub create_if_missing: bool,
}

/// Validation configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// "contains" (default) or "full".
    pub mode: MatchMode,
}

/// Daemon hand-off configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DaemonConfig {
    /// Program to exec.
    pub program: PathBuf,

    /// Arguments placed before the rendered config path.
    pub args: Vec<String>,
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            // Same entrypoint as the upstream mongo image.
            program: PathBuf::from("/entrypoint.sh"),
            args: vec!["mongod".to_string(), "--config".to_string()],
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log filter directive (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Declaration of one template parameter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ParameterSpec {
    /// Binding name, e.g. "replica-set-name".
    pub name: String,

    /// Literal placeholder in the template, e.g. "REPLICA_SET_NAME".
    pub token: String,

    /// Constraint pattern the value must satisfy.
    pub pattern: String,

    /// Short description, logged when the parameter is bound.
    #[serde(default)]
    pub help: Option<String>,
}

impl ParameterSpec {
    pub fn new(name: &str, token: &str, pattern: &str) -> Self {
        Self {
            name: name.to_string(),
            token: token.to_string(),
            pattern: pattern.to_string(),
            help: None,
        }
    }

    pub fn with_help(mut self, help: &str) -> Self {
        self.help = Some(help.to_string());
        self
    }
}

/// Name of the replica set parameter.
pub const REPLICA_SET_NAME: &str = "replica-set-name";

/// Name of the port parameter.
pub const PORT: &str = "port";

/// Parameters understood by the stock mongod template.
pub fn default_parameters() -> Vec<ParameterSpec> {
    vec![
        ParameterSpec::new(REPLICA_SET_NAME, "REPLICA_SET_NAME", "[a-z]+")
            .with_help("replica set name"),
        ParameterSpec::new(PORT, "PORT", "[0-9]{4,5}").with_help("mongodb port number"),
    ]
}
