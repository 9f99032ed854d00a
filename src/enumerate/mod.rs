//! Directory enumeration with name-based exclusions.
//!
//! Walks a root directory, never descends into excluded directory names,
//! drops excluded file names, and returns the remaining paths sorted by
//! their string form so repeated runs over the same tree agree on indices.

use anyhow::{Result, anyhow};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

use crate::telemetry::{LogMessage, log_with_context};


/// Directory names that are never descended into.
pub const EXCLUDED_DIRS: &[&str] = &[
    "node_modules",
    "__pycache__",
    ".git",
    "dist",
    "build",
    ".next",
    ".mw",
];

/// File base names that are never listed.
pub const EXCLUDED_FILES: &[&str] = &["package-lock.json", ".DS_Store"];

/// Configuration options for directory enumeration.
#[derive(Debug, Clone)]
pub struct EnumerateOptions {
    /// Directory names whose whole subtree is skipped.
    ///
    /// Matching is exact on the directory's own name, not its path. The root
    /// directory is always walked even if its name appears here.
    pub exclude_dirs: Vec<String>,

    /// File base names that are skipped wherever they appear.
    pub exclude_files: Vec<String>,
}

impl Default for EnumerateOptions {
    fn default() -> Self {
        Self {
            exclude_dirs: EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect(),
            exclude_files: EXCLUDED_FILES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl EnumerateOptions {
    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.exclude_dirs.iter().any(|d| d == name)
    }

    pub fn is_excluded_file(&self, name: &str) -> bool {
        self.exclude_files.iter().any(|f| f == name)
    }
}

/// Lists every file under `root` that survives the exclusion sets.
///
/// # Arguments
///
/// * `root` - The directory to walk; returned paths are prefixed with it
/// * `options` - The exclusion sets to apply
///
/// # Returns
///
/// The kept file paths, sorted lexicographically by path string.
///
/// # Errors
///
/// Returns an error if `root` does not exist or is not a directory.
/// Errors on individual entries below the root are logged and skipped.
pub fn enumerate_files(root: &Path, options: &EnumerateOptions) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        return Err(anyhow!("Directory not found: {}", root.display()));
    }

    if !root.is_dir() {
        return Err(anyhow!("Not a directory: {}", root.display()));
    }

    let mut files = Vec::new();

    for result in build_walk(root, options) {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                log_with_context(
                    log::Level::Warn,
                    LogMessage {
                        message: format!("Error walking directory: {}", err),
                        module: "enumerate",
                        context: Some(vec![("directory", root.display().to_string())]),
                    },
                );
                continue;
            }
        };

        let path = entry.path();
        // Follows symlinks, so a link to a directory is neither walked nor listed
        if path.is_dir() {
            continue;
        }

        let excluded = entry
            .file_name()
            .to_str()
            .is_some_and(|name| options.is_excluded_file(name));
        if !excluded {
            files.push(path.to_path_buf());
        }
    }

    sort_by_path_string(&mut files);

    log_with_context(
        log::Level::Debug,
        LogMessage {
            message: "Enumerated files".to_string(),
            module: "enumerate",
            context: Some(vec![
                ("directory", root.display().to_string()),
                ("count", files.len().to_string()),
            ]),
        },
    );

    Ok(files)
}

/// Sorts paths by their string form.
///
/// `Path`'s own ordering compares component by component, which places
/// `a/b` before `a-c`; string ordering is the one callers index against.
pub fn sort_by_path_string(paths: &mut [PathBuf]) {
    paths.sort_by_cached_key(|p| p.to_string_lossy().into_owned());
}

/// Builds a walker with every ignore-file and hidden-file filter disabled,
/// pruning excluded directory names before descent.
fn build_walk(root: &Path, options: &EnumerateOptions) -> ignore::Walk {
    let exclude_dirs = options.exclude_dirs.clone();

    let mut builder = WalkBuilder::new(root);
    builder.standard_filters(false);
    builder.follow_links(false);
    builder.filter_entry(move |entry| {
        if entry.depth() == 0 {
            return true;
        }
        let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
        let excluded = entry
            .file_name()
            .to_str()
            .is_some_and(|name| exclude_dirs.iter().any(|d| d == name));
        !(is_dir && excluded)
    });

    builder.build()
}
