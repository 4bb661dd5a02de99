//! Startup orchestration.
//!
//! # Responsibilities
//! - Bind collected values into the parameter registry
//! - Validate values and network identity
//! - Render the daemon configuration
//! - Register the hosts entry
//! - Hand off to the daemon
//!
//! # Design Decisions
//! - Fail fast: any error is fatal and nothing is retried
//! - Nothing is written until every value has been validated
//! - Stages run in order, synchronously

use crate::config::schema::EntrypointConfig;
use crate::error::EntrypointError;
use crate::lifecycle::handoff::{DaemonCommand, Handoff};
use crate::net::hosts::HostsRegistrar;
use crate::net::identity::NetworkIdentity;
use crate::params::registry::{ConstraintRegistry, RegistryBuilder};
use crate::params::validator::Validator;
use crate::render::template::render;

/// Pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    CollectingInput,
    Validating,
    Rendering,
    RegisteringHost,
    HandingOff,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::CollectingInput => "collecting-input",
            Stage::Validating => "validating",
            Stage::Rendering => "rendering",
            Stage::RegisteringHost => "registering-host",
            Stage::HandingOff => "handing-off",
        };
        f.write_str(name)
    }
}

/// Raw user input: parameter values by name plus the network identity.
#[derive(Debug, Clone, Default)]
pub struct Inputs {
    pub values: Vec<(String, String)>,
    pub identity: NetworkIdentity,
}

impl Inputs {
    pub fn new(identity: NetworkIdentity) -> Self {
        Self {
            values: Vec::new(),
            identity,
        }
    }

    /// Add a value for a named parameter. Later values win.
    pub fn value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.push((name.into(), value.into()));
        self
    }
}

/// Runs validate → render → register → hand off.
pub struct Entrypoint<H> {
    config: EntrypointConfig,
    handoff: H,
}

impl<H: Handoff> Entrypoint<H> {
    pub fn new(config: EntrypointConfig, handoff: H) -> Self {
        Self { config, handoff }
    }

    pub fn handoff(&self) -> &H {
        &self.handoff
    }

    /// Run the pipeline.
    ///
    /// With a real process replacement this only returns on error.
    pub fn run(&mut self, inputs: Inputs) -> Result<(), EntrypointError> {
        let registry = self.collect(&inputs)?;
        let identity = &inputs.identity;

        tracing::info!(
            stage = %Stage::Validating,
            mode = %self.config.validation.mode,
            "Validating inputs"
        );
        Validator::new(self.config.validation.mode).validate(&registry, identity)?;

        let paths = &self.config.paths;
        tracing::info!(
            stage = %Stage::Rendering,
            template = %paths.template.display(),
            output = %paths.config.display(),
            "Rendering configuration"
        );
        render(&registry, &paths.template, &paths.config)?;

        tracing::info!(
            stage = %Stage::RegisteringHost,
            hosts = %paths.hosts.display(),
            ip = %identity.ip,
            fqdn = %identity.fqdn,
            "Registering hosts entry"
        );
        HostsRegistrar::new(&paths.hosts)
            .create_if_missing(self.config.hosts.create_if_missing)
            .register(&identity.ip, &identity.fqdn)?;

        let command = DaemonCommand::from_config(&self.config.daemon, &paths.config);
        tracing::info!(stage = %Stage::HandingOff, command = %command, "Starting mongod");
        self.handoff.hand_off(&command)?;

        Ok(())
    }

    fn collect(&self, inputs: &Inputs) -> Result<ConstraintRegistry, EntrypointError> {
        tracing::debug!(
            stage = %Stage::CollectingInput,
            declared = self.config.parameters.len(),
            supplied = inputs.values.len(),
            "Binding input values"
        );
        let mut builder = RegistryBuilder::new(&self.config.parameters)?;
        for (name, value) in &inputs.values {
            builder.bind(name, value.as_str())?;
        }
        for spec in &self.config.parameters {
            tracing::debug!(
                name = %spec.name,
                token = %spec.token,
                help = spec.help.as_deref().unwrap_or(""),
                "Parameter declared"
            );
        }
        Ok(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::handoff::HandoffError;
    use crate::params::validator::ValidationError;

    #[derive(Default)]
    struct Recorder {
        commands: Vec<DaemonCommand>,
    }

    impl Handoff for Recorder {
        fn hand_off(&mut self, command: &DaemonCommand) -> Result<(), HandoffError> {
            self.commands.push(command.clone());
            Ok(())
        }
    }

    #[test]
    fn test_unknown_input_fails_before_validation() {
        let mut entrypoint = Entrypoint::new(EntrypointConfig::default(), Recorder::default());
        let inputs =
            Inputs::new(NetworkIdentity::new("10.0.0.5", "a")).value("bind-ip", "0.0.0.0");

        let err = entrypoint.run(inputs).unwrap_err();
        assert_eq!(err.stage(), Stage::CollectingInput);
        assert!(entrypoint.handoff().commands.is_empty());
    }

    #[test]
    fn test_invalid_input_never_hands_off() {
        let mut entrypoint = Entrypoint::new(EntrypointConfig::default(), Recorder::default());
        let inputs = Inputs::new(NetworkIdentity::new("10.0.0.5", "a"))
            .value("replica-set-name", "rs0")
            .value("port", "1");

        let err = entrypoint.run(inputs).unwrap_err();
        assert!(matches!(
            err,
            EntrypointError::Validation(ValidationError::Parameter { ref name, .. })
                if name == "port"
        ));
        assert!(entrypoint.handoff().commands.is_empty());
    }

    #[test]
    fn test_later_value_wins() {
        let mut entrypoint = Entrypoint::new(EntrypointConfig::default(), Recorder::default());
        let inputs = Inputs::default()
            .value("port", "27017")
            .value("port", "");
        let registry = entrypoint.collect(&inputs).unwrap();
        assert_eq!(registry.get("port").unwrap().value(), "");
        assert!(entrypoint.run(inputs).is_err());
    }
}
