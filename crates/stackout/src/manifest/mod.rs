use std::path::Path;

use indexmap::IndexMap;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ArtifactError;

/// The stack-naming rule: a stack artifact id ends with this marker followed
/// by [`STACK_SUFFIX_LEN`] uppercase alphanumeric characters.
const STACK_MARKER: &[u8] = b"Stack";
const STACK_SUFFIX_LEN: usize = 8;

/// Cloud-assembly manifest written by `cdk synth` under `cdk.out/`.
///
/// Only the `artifacts` section is read. Every sibling field, and the
/// metadata attached to each artifact, is carried opaquely.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AssemblyManifest {
    /// Artifact id → artifact metadata, in document order.
    #[serde(default)]
    pub artifacts: IndexMap<String, Value>,
}

impl AssemblyManifest {
    /// Read and parse a manifest. The file handle is released before this
    /// returns, on the failure paths included.
    pub fn from_location(path: &Path) -> Result<Self, ArtifactError> {
        debug!("loading cloud-assembly manifest from {}", path.display());
        let content =
            std::fs::read_to_string(path).map_err(|e| ArtifactError::ManifestLoad {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        serde_json::from_str(&content).map_err(|e| ArtifactError::ManifestLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// All artifact ids, in document order.
    pub fn artifact_ids(&self) -> impl Iterator<Item = &str> {
        self.artifacts.keys().map(|k| k.as_str())
    }

    /// The artifact ids that name a stack.
    pub fn stack_artifact_ids(&self) -> Vec<&str> {
        self.artifact_ids().filter(|id| is_stack_artifact_id(id)).collect()
    }

    /// Resolve the stack name for this manifest.
    ///
    /// Fails unless exactly one artifact id satisfies
    /// [`is_stack_artifact_id`]; the error carries the observed match count
    /// and the full artifact-id listing.
    pub fn stack_name(&self) -> Result<String, ArtifactError> {
        let stack_names = self.stack_artifact_ids();
        if let [stack_name] = stack_names.as_slice() {
            return Ok(stack_name.to_string());
        }
        warn!("expected exactly one stack artifact, found {}", stack_names.len());
        debug!(
            "manifest artifacts: {}",
            serde_json::to_string(&self.artifacts).unwrap_or_default()
        );
        Err(ArtifactError::AmbiguousStackName {
            count: stack_names.len(),
            artifacts: self.artifact_ids().map(String::from).collect(),
        })
    }
}

/// True when `id` names a stack artifact: the id ends with the literal
/// `Stack` followed by exactly eight uppercase alphanumeric characters
/// (`A-Z`, `0-9`), anchored at the end of the id.
///
/// Exactly eight — a seven or nine character suffix is some other artifact.
pub fn is_stack_artifact_id(id: &str) -> bool {
    let bytes = id.as_bytes();
    if bytes.len() < STACK_MARKER.len() + STACK_SUFFIX_LEN {
        return false;
    }
    let (head, suffix) = bytes.split_at(bytes.len() - STACK_SUFFIX_LEN);
    head.ends_with(STACK_MARKER)
        && suffix.iter().all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
}
