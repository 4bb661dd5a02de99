//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check parameter declarations (names, tokens, patterns)
//! - Check paths and the daemon command are usable
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: EntrypointConfig → Result<(), Vec<ConfigIssue>>
//! - Runs before config is accepted into the system

use tracing_subscriber::EnvFilter;

use crate::config::schema::EntrypointConfig;
use crate::params::registry::{check_specs, RegistryError};

/// A semantic problem in the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigIssue {
    #[error("{0}")]
    Parameter(RegistryError),

    #[error("paths.{0} must not be empty")]
    EmptyPath(&'static str),

    #[error("paths.template and paths.config must differ")]
    TemplateIsOutput,

    #[error("daemon.program must not be empty")]
    EmptyDaemonProgram,

    #[error("observability.log_level '{0}' is not a valid filter")]
    InvalidLogLevel(String),
}

/// Validate a loaded configuration.
pub fn validate_config(config: &EntrypointConfig) -> Result<(), Vec<ConfigIssue>> {
    let mut errors: Vec<ConfigIssue> = check_specs(&config.parameters)
        .into_iter()
        .map(ConfigIssue::Parameter)
        .collect();

    let paths = [
        ("template", &config.paths.template),
        ("config", &config.paths.config),
        ("hosts", &config.paths.hosts),
    ];
    for (field, path) in paths {
        if path.as_os_str().is_empty() {
            errors.push(ConfigIssue::EmptyPath(field));
        }
    }
    let template = &config.paths.template;
    if !template.as_os_str().is_empty() && *template == config.paths.config {
        errors.push(ConfigIssue::TemplateIsOutput);
    }

    if config.daemon.program.as_os_str().is_empty() {
        errors.push(ConfigIssue::EmptyDaemonProgram);
    }

    if EnvFilter::try_new(&config.observability.log_level).is_err() {
        errors.push(ConfigIssue::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::ParameterSpec;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&EntrypointConfig::default()), Ok(()));
    }

    #[test]
    fn test_collects_every_error() {
        let mut config = EntrypointConfig::default();
        config.paths.hosts = PathBuf::new();
        config.daemon.program = PathBuf::new();
        config.parameters.push(ParameterSpec::new("admin-port", "ADMIN_PORT", "[0-9]+"));

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(matches!(
            errors[0],
            ConfigIssue::Parameter(RegistryError::OverlappingToken { .. })
        ));
        assert!(errors.contains(&ConfigIssue::EmptyPath("hosts")));
        assert!(errors.contains(&ConfigIssue::EmptyDaemonProgram));
    }

    #[test]
    fn test_template_must_not_be_output() {
        let mut config = EntrypointConfig::default();
        config.paths.config = config.paths.template.clone();
        assert_eq!(
            validate_config(&config),
            Err(vec![ConfigIssue::TemplateIsOutput])
        );
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = EntrypointConfig::default();
        config.observability.log_level = "mongod_entrypoint=loud".to_string();
        assert!(matches!(
            validate_config(&config).unwrap_err()[0],
            ConfigIssue::InvalidLogLevel(_)
        ));
    }
}
