//! Error types for artifact extraction

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading the CDK artifact documents
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// Failed to read or parse the cloud-assembly manifest
    #[error("failed to load manifest from {path}: {message}")]
    ManifestLoad {
        /// Path the manifest was read from
        path: PathBuf,
        /// Underlying IO or JSON error
        message: String,
    },

    /// Failed to read or parse the deploy-outputs document
    #[error("failed to load outputs from {path}: {message}")]
    OutputsLoad {
        /// Path the outputs document was read from
        path: PathBuf,
        /// Underlying IO or JSON error
        message: String,
    },

    /// The manifest did not contain exactly one stack artifact
    #[error("expected exactly one stack artifact in the manifest, found {count}")]
    AmbiguousStackName {
        /// How many artifact ids matched the stack-naming rule
        count: usize,
        /// Every artifact id present in the manifest, in document order
        artifacts: Vec<String>,
    },

    /// The requested (stack, output) pair is absent from the outputs document
    #[error("output '{output_name}' not recorded for stack '{stack_name}'")]
    MissingOutput {
        /// Stack the lookup ran against
        stack_name: String,
        /// Output name that was requested
        output_name: String,
    },
}
