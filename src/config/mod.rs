//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → EntrypointConfig (validated, immutable)
//!     → CLI flags bind values on top
//! ```
//!
//! # Design Decisions
//! - No file means the stock defaults for the mongo image
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_or_default, ConfigError};
pub use schema::EntrypointConfig;
pub use schema::ParameterSpec;
