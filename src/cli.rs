//! Command-line interface implementation for filetransform.
//! Provides argument parsing using clap; the parameter and variable maps
//! are supplied as serialized JSON objects, matching the host plugin's
//! invocation surface.

use clap::Parser;
use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::variables::VariableStore;

/// Command-line arguments structure for filetransform.
#[derive(Parser, Debug)]
#[command(author, version, about = "filetransform: bulk file rewriting with variable interpolation", long_about = None)]
pub struct Args {
    /// JSON object of transform parameters: folderPath, targetFiles,
    /// fileType and optional folderOutPath
    #[arg(short, long, value_name = "JSON")]
    pub parameters: String,

    /// JSON object of variables: name to value string, or name to
    /// {"value": .., "sensitive": ..}
    #[arg(short, long, value_name = "JSON", default_value = "{}")]
    pub variables: String,

    /// Enable verbose logging output
    #[arg(long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}

/// Deserializes the `--parameters` JSON object.
pub fn parse_parameters(raw: &str) -> Result<IndexMap<String, String>> {
    serde_json::from_str(raw)
        .map_err(|e| Error::InvalidParameters(format!("parameters are not a JSON object: {}", e)))
}

/// Deserializes the `--variables` JSON object into a variable store.
pub fn parse_variables(raw: &str) -> Result<VariableStore> {
    serde_json::from_str(raw)
        .map_err(|e| Error::InvalidParameters(format!("variables are not a JSON object: {}", e)))
}
