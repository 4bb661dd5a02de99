//! Configuration rendering.
//!
//! Literal keyword substitution only: every placeholder token in the template
//! is replaced by its parameter's value. Tokens missing from the template are
//! ignored.

pub mod template;

pub use template::{render, RenderError};
