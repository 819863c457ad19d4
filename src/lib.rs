//! Filetransform is a variable-interpolation and bulk file-rewriting engine.
//! Given a folder of files, a filename pattern, a declared file type and a set
//! of named variables, it rewrites matching files by substituting
//! `${{ name }}` placeholder tokens and mirrors the results under an output
//! folder.

/// Command-line interface module for the filetransform application
pub mod cli;

/// Error types and handling for the filetransform application
pub mod error;

/// Invocation boundary: parameter-map validation and host task results
pub mod invoke;

/// Placeholder token resolution against a variable store
pub mod resolver;

/// Core transform orchestration
/// Enumerates matching files, rewrites their contents and aggregates results
pub mod transform;

/// Variable value and store types supplied by the caller
pub mod variables;
