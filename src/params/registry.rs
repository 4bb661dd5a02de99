//! Constraint registry: declared parameters and their bound values.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::config::schema::ParameterSpec;
use crate::params::constraint::Constraint;

/// Errors raised while declaring parameters or binding values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("parameter declaration #{index} has an empty name")]
    EmptyName { index: usize },

    #[error("parameter '{name}' has an empty placeholder token")]
    EmptyToken { name: String },

    #[error("parameter '{name}' has an empty pattern")]
    EmptyPattern { name: String },

    #[error("parameter '{name}' has an invalid pattern '{pattern}': {reason}")]
    InvalidPattern {
        name: String,
        pattern: String,
        reason: String,
    },

    #[error("parameter '{0}' is declared more than once")]
    DuplicateName(String),

    #[error("placeholder token '{token}' is declared by both '{first}' and '{second}'")]
    DuplicateToken {
        token: String,
        first: String,
        second: String,
    },

    /// One token is a substring of another, so substitution order would matter.
    #[error(
        "placeholder token '{inner}' ('{inner_name}') is contained in token '{outer}' \
         ('{outer_name}')"
    )]
    OverlappingToken {
        inner: String,
        inner_name: String,
        outer: String,
        outer_name: String,
    },

    #[error("no parameter named '{0}' is declared")]
    UnknownParameter(String),
}

/// Check a list of declarations, returning every problem found.
pub fn check_specs(specs: &[ParameterSpec]) -> Vec<RegistryError> {
    let mut errors = Vec::new();
    let mut seen: BTreeMap<&str, usize> = BTreeMap::new();

    for (index, spec) in specs.iter().enumerate() {
        if spec.name.is_empty() {
            errors.push(RegistryError::EmptyName { index });
            continue;
        }
        if seen.insert(spec.name.as_str(), index).is_some() {
            errors.push(RegistryError::DuplicateName(spec.name.clone()));
        }
        if spec.token.is_empty() {
            errors.push(RegistryError::EmptyToken {
                name: spec.name.clone(),
            });
        }
        if spec.pattern.is_empty() {
            errors.push(RegistryError::EmptyPattern {
                name: spec.name.clone(),
            });
        } else if let Err(e) = Constraint::new(&spec.pattern) {
            errors.push(RegistryError::InvalidPattern {
                name: spec.name.clone(),
                pattern: spec.pattern.clone(),
                reason: e.to_string(),
            });
        }
    }

    for (i, a) in specs.iter().enumerate() {
        for b in specs.iter().skip(i + 1) {
            if a.token.is_empty() || b.token.is_empty() {
                continue;
            }
            if a.token == b.token {
                errors.push(RegistryError::DuplicateToken {
                    token: a.token.clone(),
                    first: a.name.clone(),
                    second: b.name.clone(),
                });
            } else if b.token.contains(a.token.as_str()) {
                errors.push(overlap(a, b));
            } else if a.token.contains(b.token.as_str()) {
                errors.push(overlap(b, a));
            }
        }
    }

    errors
}

fn overlap(inner: &ParameterSpec, outer: &ParameterSpec) -> RegistryError {
    RegistryError::OverlappingToken {
        inner: inner.token.clone(),
        inner_name: inner.name.clone(),
        outer: outer.token.clone(),
        outer_name: outer.name.clone(),
    }
}

/// A declared parameter together with its bound value.
#[derive(Debug, Clone)]
pub struct Parameter {
    name: String,
    token: String,
    constraint: Constraint,
    value: String,
}

impl Parameter {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Literal placeholder replaced during rendering.
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn constraint(&self) -> &Constraint {
        &self.constraint
    }

    /// Raw value as supplied; empty if never bound.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Registry under construction. Values can be bound until [`build`](Self::build).
#[derive(Debug)]
pub struct RegistryBuilder {
    entries: BTreeMap<String, Parameter>,
}

impl RegistryBuilder {
    /// Start a registry from declarations. Fails on the first invalid one.
    pub fn new(specs: &[ParameterSpec]) -> Result<Self, RegistryError> {
        if let Some(first) = check_specs(specs).into_iter().next() {
            return Err(first);
        }

        let mut entries = BTreeMap::new();
        for spec in specs {
            let constraint =
                Constraint::new(&spec.pattern).map_err(|e| RegistryError::InvalidPattern {
                    name: spec.name.clone(),
                    pattern: spec.pattern.clone(),
                    reason: e.to_string(),
                })?;
            entries.insert(
                spec.name.clone(),
                Parameter {
                    name: spec.name.clone(),
                    token: spec.token.clone(),
                    constraint,
                    value: String::new(),
                },
            );
        }

        Ok(Self { entries })
    }

    /// Bind a raw value to a declared parameter, replacing any earlier binding.
    pub fn bind(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<&mut Self, RegistryError> {
        let entry = self
            .entries
            .get_mut(name)
            .ok_or_else(|| RegistryError::UnknownParameter(name.to_string()))?;
        entry.value = value.into();
        Ok(self)
    }

    /// Freeze the registry.
    pub fn build(self) -> ConstraintRegistry {
        ConstraintRegistry {
            entries: self.entries,
        }
    }
}

/// Immutable set of parameters, iterated in name order.
#[derive(Debug, Clone)]
pub struct ConstraintRegistry {
    entries: BTreeMap<String, Parameter>,
}

impl ConstraintRegistry {
    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.entries.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
