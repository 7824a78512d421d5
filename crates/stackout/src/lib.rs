//! Read deployment metadata out of CDK artifacts.
//!
//! `cdk synth` leaves a cloud-assembly manifest under `cdk.out/`, and
//! `cdk deploy --outputs-file` records the deployed stack outputs next to
//! it. Deploy scripts and integration tests use this crate to answer two
//! questions about those documents: which stack was synthesized, and what
//! value a given stack output has.
//!
//! ```no_run
//! let api_url = stackout::get_output("ApiUrl", None)?;
//! # Ok::<(), stackout::ArtifactError>(())
//! ```
//!
//! Both operations re-read their document on every call and hold no state
//! between calls. Lookups either return the exact recorded value or fail
//! with a typed [`ArtifactError`]; there is no partial success.

pub mod config;
pub mod errors;
pub mod manifest;
pub mod outputs;

pub use config::{ArtifactsConfig, DEFAULT_MANIFEST_PATH, DEFAULT_OUTPUTS_PATH};
pub use errors::ArtifactError;
pub use manifest::{is_stack_artifact_id, AssemblyManifest};
pub use outputs::OutputsDocument;

/// Resolve the stack name from the manifest at its default location.
///
/// Fails unless the manifest lists exactly one stack artifact.
pub fn get_stack_name() -> Result<String, ArtifactError> {
    ArtifactsConfig::default().get_stack_name()
}

/// Read one deploy output from the documents at their default locations.
///
/// `stack_name` defaults to the stack resolved from the manifest, so the
/// common single-stack caller only names the output.
pub fn get_output(output_name: &str, stack_name: Option<&str>) -> Result<String, ArtifactError> {
    ArtifactsConfig::default().get_output(output_name, stack_name)
}
