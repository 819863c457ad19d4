//! Invocation boundary consumed by a host process.
//! Validates the host's loosely-typed parameter map into a typed
//! [`TransformRequest`] once, runs the transformer, and maps the report
//! into a host task result.

use indexmap::IndexMap;
use log::debug;

use crate::error::{Error, Result};
use crate::transform::{FileError, TransformRequest, Transformer};
use crate::variables::VariableStore;

/// Keys required in the host parameter map.
const REQUIRED_PARAMETERS: [&str; 3] = ["folderPath", "targetFiles", "fileType"];

/// Host-facing outcome status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Completed,
    Failed,
}

/// Host-facing task result built from a transform report.
#[derive(Debug)]
pub struct TaskResult {
    pub name: String,
    pub status: TaskStatus,
    pub errors: Vec<FileError>,
    pub warnings: Vec<String>,
}

impl TransformRequest {
    /// Builds a typed request from the host parameter map.
    ///
    /// # Errors
    /// * `Error::InvalidParameters` naming the first missing required key
    pub fn from_parameters(parameters: &IndexMap<String, String>) -> Result<Self> {
        for key in REQUIRED_PARAMETERS {
            if !parameters.contains_key(key) {
                return Err(Error::InvalidParameters(format!(
                    "required parameter '{}' is missing",
                    key
                )));
            }
        }
        Ok(Self {
            folder_path: parameters["folderPath"].clone(),
            target_files: parameters["targetFiles"].clone(),
            file_type: parameters["fileType"].clone(),
            folder_out_path: parameters.get("folderOutPath").cloned(),
        })
    }
}

/// Runs one transform for the host.
///
/// Missing required parameters abort the run before any file processing;
/// per-file failures surface as a `Failed` status carrying the aggregated
/// error descriptors.
pub fn invoke(
    parameters: &IndexMap<String, String>,
    variables: &VariableStore,
) -> Result<TaskResult> {
    let request = TransformRequest::from_parameters(parameters)?;
    debug!("Transform files of type '{}' under {}", request.file_type, request.folder_path);

    let report = Transformer::new().run(&request, variables)?;
    let status = if report.is_success() { TaskStatus::Completed } else { TaskStatus::Failed };

    Ok(TaskResult {
        name: "filetransform run".to_string(),
        status,
        errors: report.errors,
        warnings: report.warnings,
    })
}
