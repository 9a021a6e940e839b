//! Validation of METS workspace manifests: XSD grammar, business rules, PAGE
//! descriptor cross-checks and the ground-truth condition vocabulary.
//!
//! # Examples
//! ```rust,no_run
//! use metsval_core::config::Config;
//! use std::path::Path;
//!
//! let report = metsval_core::validate_workspace(Path::new("workspace/mets.xml"), &Config::default())?;
//! for warning in &report.warnings {
//!     println!("warning: {}", warning.message);
//! }
//! # Ok::<(), metsval_core::Error>(())
//! ```
pub mod config;
pub mod document;
pub mod error;
pub mod manifest;
pub mod page;
pub mod schema;
pub mod sniff;
pub mod vocabulary;
pub mod workspace;

pub use error::{FailureKind, ValidationError, ValidationIssue};
pub use workspace::{ValidationReport, WorkspaceValidator};

use config::{Config, ConfigError};
use schema::{SchemaError, SchemaRegistry};
use std::path::Path;
use thiserror::Error;
use vocabulary::ControlledVocabulary;

/// Top-level error wrapper for core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Bundled schemas plus those found in [`Config::schema_dir`].
pub fn build_registry(config: &Config) -> Result<SchemaRegistry, SchemaError> {
    let mut registry = SchemaRegistry::bundled()?;
    if let Some(dir) = config.schema_dir() {
        registry.register_dir(dir)?;
    }
    Ok(registry)
}

/// Build the registry and vocabulary for `config` and validate one manifest.
pub fn validate_workspace(manifest: &Path, config: &Config) -> Result<ValidationReport, Error> {
    let registry = build_registry(config)?;
    let vocabulary = ControlledVocabulary::canonical();
    let report = WorkspaceValidator::new(&registry, &vocabulary, config).validate(manifest)?;
    Ok(report)
}
