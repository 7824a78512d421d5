//! Artifact document locations

use std::path::PathBuf;

use crate::errors::ArtifactError;
use crate::manifest::AssemblyManifest;
use crate::outputs::OutputsDocument;

/// Where `cdk synth` writes the cloud-assembly manifest, relative to the
/// project root.
pub const DEFAULT_MANIFEST_PATH: &str = "./cdk.out/manifest.json";

/// Where `cdk deploy --outputs-file` records the deployed stack outputs.
pub const DEFAULT_OUTPUTS_PATH: &str = "./cdk.outputs.json";

/// Locations of the two artifact documents.
///
/// The defaults match the conventional layout of a CDK project root; tests
/// point these at fixture files instead. Documents are re-read on every
/// call, so a redeploy between calls is picked up without any invalidation.
#[derive(Clone, Debug)]
pub struct ArtifactsConfig {
    pub manifest_path: PathBuf,
    pub outputs_path: PathBuf,
}

impl Default for ArtifactsConfig {
    fn default() -> Self {
        Self {
            manifest_path: PathBuf::from(DEFAULT_MANIFEST_PATH),
            outputs_path: PathBuf::from(DEFAULT_OUTPUTS_PATH),
        }
    }
}

impl ArtifactsConfig {
    pub fn new(manifest_path: PathBuf, outputs_path: PathBuf) -> Self {
        Self { manifest_path, outputs_path }
    }

    /// Resolve the stack name from the configured manifest.
    pub fn get_stack_name(&self) -> Result<String, ArtifactError> {
        let manifest = AssemblyManifest::from_location(&self.manifest_path)?;
        manifest.stack_name()
    }

    /// Read one deploy output from the configured outputs document.
    ///
    /// When `stack_name` is `None` the stack is resolved from the manifest
    /// first, exactly as [`ArtifactsConfig::get_stack_name`] would.
    pub fn get_output(
        &self,
        output_name: &str,
        stack_name: Option<&str>,
    ) -> Result<String, ArtifactError> {
        let stack_name = match stack_name {
            Some(name) => name.to_string(),
            None => self.get_stack_name()?,
        };
        let outputs = OutputsDocument::from_location(&self.outputs_path)?;
        let value = outputs.output(&stack_name, output_name)?;
        Ok(value.to_string())
    }
}
