//! Core transform orchestration.
//! Enumerates files under a source folder, rewrites the contents of those
//! matching the target pattern through the resolver, and mirrors the
//! results under the output folder.

use globset::{Glob, GlobSet, GlobSetBuilder};
use log::{debug, warn};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::resolver::Resolver;
use crate::variables::VariableStore;

/// The four transform parameters, typed and validated once at the
/// boundary. Each string may itself contain placeholder tokens; they are
/// resolved against the variable store before enumeration starts.
#[derive(Debug, Clone)]
pub struct TransformRequest {
    /// Source folder to enumerate
    pub folder_path: String,
    /// Glob pattern, or comma-separated list of patterns, matched
    /// against file names
    pub target_files: String,
    /// Declared file type; narrows bare wildcard patterns to the
    /// type's extensions
    pub file_type: String,
    /// Output folder root; `None` rewrites in place
    pub folder_out_path: Option<String>,
}

/// A read or write failure on one candidate file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileError {
    pub path: PathBuf,
    pub cause: String,
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.cause)
    }
}

/// Aggregated outcome of one transform run.
///
/// Per-file failures never abort the run; they accumulate here in the
/// order files were processed. Missing variable names encountered while
/// resolving parameters or file contents accumulate as warnings.
#[derive(Debug, Default)]
pub struct TransformReport {
    pub files_written: usize,
    pub errors: Vec<FileError>,
    pub warnings: Vec<String>,
}

impl TransformReport {
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    fn record_warnings(&mut self, missing: Vec<String>) {
        for name in missing {
            if !self.warnings.contains(&name) {
                self.warnings.push(name);
            }
        }
    }

    fn record_error(&mut self, path: &Path, cause: impl ToString) {
        let error = FileError { path: path.to_path_buf(), cause: cause.to_string() };
        warn!("Failed to transform {}", error);
        self.errors.push(error);
    }
}

/// File extensions eligible for a declared file type when the target
/// pattern is a bare wildcard. Unrecognized types impose no narrowing.
fn type_extensions(file_type: &str) -> Option<&'static [&'static str]> {
    match file_type.trim().to_ascii_lowercase().as_str() {
        "json" => Some(&["json"]),
        "yaml" | "yml" => Some(&["yml", "yaml"]),
        "xml" => Some(&["xml"]),
        _ => None,
    }
}

/// A pattern that matches every file name (or every file name with an
/// extension) rather than selecting by name.
fn is_broad_pattern(pattern: &str) -> bool {
    matches!(pattern, "*" | "*.*" | "**/*")
}

fn build_glob_set(patterns: &[&str]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(
            Glob::new(pattern)
                .map_err(|e| Error::PatternError(format!("invalid pattern '{}': {}", pattern, e)))?,
        );
    }
    builder.build().map_err(|e| Error::PatternError(e.to_string()))
}

/// Executes transform runs. Stateless between runs; holds only the
/// compiled token pattern.
pub struct Transformer {
    resolver: Resolver,
}

impl Transformer {
    pub fn new() -> Self {
        Self { resolver: Resolver::new() }
    }

    /// Runs one end-to-end transform.
    ///
    /// # Arguments
    /// * `request` - The four (possibly templated) transform parameters
    /// * `variables` - Read-only variable store for the run
    ///
    /// # Returns
    /// * `Result<TransformReport>` - Aggregated per-file results; `Err`
    ///   only for failures that abort the run before processing (bad
    ///   glob, unreadable source folder)
    pub fn run(
        &self,
        request: &TransformRequest,
        variables: &VariableStore,
    ) -> Result<TransformReport> {
        let mut report = TransformReport::default();

        let folder = self.resolve_parameter(&request.folder_path, variables, &mut report);
        let target_files = self.resolve_parameter(&request.target_files, variables, &mut report);
        let file_type = self.resolve_parameter(&request.file_type, variables, &mut report);
        let folder_out = match &request.folder_out_path {
            Some(out) => self.resolve_parameter(out, variables, &mut report),
            None => folder.clone(),
        };

        let patterns: Vec<&str> =
            target_files.split(',').map(str::trim).filter(|p| !p.is_empty()).collect();
        let (broad, narrow): (Vec<&str>, Vec<&str>) =
            patterns.into_iter().partition(|p| is_broad_pattern(p));
        let narrow_set = build_glob_set(&narrow)?;
        let broad_set = build_glob_set(&broad)?;
        let extensions = type_extensions(&file_type);

        let source_root = Path::new(&folder);
        let output_root = Path::new(&folder_out);

        // Snapshot the matched files before writing anything, so output
        // written under the source root (nested folderOutPath) is never
        // re-enumerated mid-run.
        let mut matched: Vec<PathBuf> = Vec::new();
        for entry in WalkDir::new(source_root) {
            let entry = match entry {
                Ok(entry) => entry,
                // A failure on the walk root itself means nothing can be
                // enumerated; deeper failures are per-entry errors and
                // the run continues.
                Err(e) if e.depth() == 0 => return Err(Error::IoError(e.into())),
                Err(e) => {
                    let path = e.path().unwrap_or(source_root).to_path_buf();
                    report.record_error(&path, e);
                    continue;
                }
            };
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if matches_target(path, &narrow_set, &broad_set, extensions) {
                matched.push(path.to_path_buf());
            }
        }

        for path in &matched {
            // Walk entries always live under the walk root.
            let relative_path = path.strip_prefix(source_root).unwrap_or(path);
            let target_path = output_root.join(relative_path);
            debug!("Transforming {} -> {}", path.display(), target_path.display());

            let content = match fs::read_to_string(path) {
                Ok(content) => content,
                Err(e) => {
                    report.record_error(path, e);
                    continue;
                }
            };

            let resolved = self.resolver.resolve(&content, variables);
            report.record_warnings(resolved.missing);
            if resolved.sensitive {
                debug!("Resolved content for {} contains sensitive values", path.display());
            }

            if let Err(e) = write_file(&target_path, &resolved.value) {
                report.record_error(path, e);
                continue;
            }
            report.files_written += 1;
        }

        Ok(report)
    }

    fn resolve_parameter(
        &self,
        input: &str,
        variables: &VariableStore,
        report: &mut TransformReport,
    ) -> String {
        let resolved = self.resolver.resolve(input, variables);
        report.record_warnings(resolved.missing);
        resolved.value
    }
}

impl Default for Transformer {
    fn default() -> Self {
        Transformer::new()
    }
}

fn matches_target(
    path: &Path,
    narrow_set: &GlobSet,
    broad_set: &GlobSet,
    extensions: Option<&[&str]>,
) -> bool {
    let file_name = match path.file_name().and_then(|n| n.to_str()) {
        Some(name) => name,
        None => return false,
    };
    if narrow_set.is_match(file_name) {
        return true;
    }
    if broad_set.is_match(file_name) {
        return match extensions {
            Some(extensions) => path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| extensions.contains(&e)),
            None => true,
        };
    }
    false
}

fn write_file(path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)
}
