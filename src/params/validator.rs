//! Value validation.
//!
//! # Order of checks
//! 1. Each parameter against its constraint, in name order
//! 2. No parameter value may contain a placeholder token
//! 3. FQDN, then IP
//!
//! The first failure is returned; remaining checks are skipped.

use thiserror::Error;

use crate::net::identity::NetworkIdentity;
use crate::params::constraint::MatchMode;
use crate::params::registry::ConstraintRegistry;

/// A supplied value that failed its check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error(
        "invalid value '{value}' for '{name}' ({token}): \
         does not match '{pattern}' ({mode} match)"
    )]
    Parameter {
        name: String,
        token: String,
        value: String,
        pattern: String,
        mode: MatchMode,
    },

    #[error("value '{value}' for '{name}' contains placeholder token '{token}'")]
    TokenCollision {
        name: String,
        value: String,
        token: String,
    },

    #[error("invalid value '{value}' for FQDN: must match '{pattern}'")]
    Fqdn { value: String, pattern: &'static str },

    #[error("invalid value '{value}' for IP: must be an IPv4 (a.b.c.d) or IPv6 address")]
    Ip { value: String },
}

/// Checks bound values and the network identity.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    mode: MatchMode,
}

impl Validator {
    pub fn new(mode: MatchMode) -> Self {
        Self { mode }
    }

    /// Run every check; pure.
    pub fn validate(
        &self,
        registry: &ConstraintRegistry,
        identity: &NetworkIdentity,
    ) -> Result<(), ValidationError> {
        for param in registry.iter() {
            if !param.constraint().is_satisfied_by(param.value(), self.mode) {
                return Err(ValidationError::Parameter {
                    name: param.name().to_string(),
                    token: param.token().to_string(),
                    value: param.value().to_string(),
                    pattern: param.constraint().pattern().to_string(),
                    mode: self.mode,
                });
            }
        }

        for param in registry.iter() {
            if let Some(other) = registry.iter().find(|p| param.value().contains(p.token())) {
                return Err(ValidationError::TokenCollision {
                    name: param.name().to_string(),
                    value: param.value().to_string(),
                    token: other.token().to_string(),
                });
            }
        }

        identity.validate()
    }
}

/// Validate with the default contains-match semantics.
pub fn validate(
    registry: &ConstraintRegistry,
    identity: &NetworkIdentity,
) -> Result<(), ValidationError> {
    Validator::default().validate(registry, identity)
}
