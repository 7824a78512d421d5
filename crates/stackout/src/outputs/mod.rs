use std::path::Path;

use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::ArtifactError;

/// Deploy-outputs document written by `cdk deploy --outputs-file`:
/// stack name → output name → value.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutputsDocument {
    stacks: IndexMap<String, IndexMap<String, String>>,
}

impl OutputsDocument {
    /// Read and parse an outputs document. The file handle is released
    /// before this returns, on the failure paths included.
    pub fn from_location(path: &Path) -> Result<Self, ArtifactError> {
        debug!("loading deploy outputs from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|e| ArtifactError::OutputsLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| ArtifactError::OutputsLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Every output recorded for `stack_name`, in document order.
    pub fn stack_outputs(&self, stack_name: &str) -> Option<&IndexMap<String, String>> {
        self.stacks.get(stack_name)
    }

    /// Look up one output value. An unknown stack reads as a stack with no
    /// outputs, so both absence cases surface as [`ArtifactError::MissingOutput`].
    pub fn output(&self, stack_name: &str, output_name: &str) -> Result<&str, ArtifactError> {
        self.stacks
            .get(stack_name)
            .and_then(|outputs| outputs.get(output_name))
            .map(|value| value.as_str())
            .ok_or_else(|| ArtifactError::MissingOutput {
                stack_name: stack_name.to_string(),
                output_name: output_name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outputs_from(json: &str) -> OutputsDocument {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn returns_the_stored_value_untransformed() {
        let outputs =
            outputs_from(r#"{"MyStackABCDEFGH": {"ApiUrl": "https://example.com"}}"#);
        assert_eq!(
            outputs.output("MyStackABCDEFGH", "ApiUrl").unwrap(),
            "https://example.com"
        );
    }

    #[test]
    fn unknown_output_under_a_known_stack_is_missing() {
        let outputs =
            outputs_from(r#"{"MyStackABCDEFGH": {"ApiUrl": "https://example.com"}}"#);
        match outputs.output("MyStackABCDEFGH", "MissingKey") {
            Err(ArtifactError::MissingOutput { stack_name, output_name }) => {
                assert_eq!(stack_name, "MyStackABCDEFGH");
                assert_eq!(output_name, "MissingKey");
            }
            other => panic!("expected MissingOutput, got {:?}", other),
        }
    }

    #[test]
    fn unknown_stack_is_missing_too() {
        let outputs =
            outputs_from(r#"{"MyStackABCDEFGH": {"ApiUrl": "https://example.com"}}"#);
        match outputs.output("OtherStack00000000", "ApiUrl") {
            Err(ArtifactError::MissingOutput { stack_name, .. }) => {
                assert_eq!(stack_name, "OtherStack00000000");
            }
            other => panic!("expected MissingOutput, got {:?}", other),
        }
    }

    #[test]
    fn stack_outputs_exposes_the_whole_mapping_for_one_stack() {
        let outputs = outputs_from(
            r#"{"MyStackABCDEFGH": {"FunctionName": "my-func", "ExtensionArn": "arn:aws:lambda:..."}}"#,
        );
        let stack = outputs.stack_outputs("MyStackABCDEFGH").unwrap();
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.get("FunctionName").map(String::as_str), Some("my-func"));
        assert!(outputs.stack_outputs("OtherStack00000000").is_none());
    }

    #[test]
    fn non_string_output_values_fail_the_parse() {
        let result: Result<OutputsDocument, _> =
            serde_json::from_str(r#"{"MyStackABCDEFGH": {"Port": 443}}"#);
        assert!(result.is_err());
    }
}
