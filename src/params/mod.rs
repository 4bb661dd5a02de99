//! Template parameters.
//!
//! # Data Flow
//! ```text
//! ParameterSpec[] (config)
//!     → registry.rs (compile constraints, check tokens)
//!     → bind raw values from the CLI
//!     → ConstraintRegistry (frozen)
//!     → validator.rs (constraints + network identity)
//! ```
//!
//! # Design Decisions
//! - Parameters are iterated in name order, so the reported error is stable
//! - Placeholder tokens may not contain one another
//! - A value may not contain any token

pub mod constraint;
pub mod registry;
pub mod validator;

pub use constraint::{Constraint, MatchMode};
pub use registry::{ConstraintRegistry, Parameter, RegistryBuilder, RegistryError};
pub use validator::{validate, ValidationError, Validator};
