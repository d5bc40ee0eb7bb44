//! Project file discovery behind an injected capability.
//!
//! The pipeline never touches the filesystem directly: it consumes a
//! [`ProjectContext`], which hands over file-like objects (relative path
//! plus content). [`DirContext`] is the standard implementation walking a
//! directory tree; tests and embedders can supply in-memory contexts.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{PackError, Result};

/// One project file: a release path (rooted at `/`, the way build
/// pipelines emit them) and its content.
#[derive(Debug, Clone)]
pub struct ProjectFile {
    /// Path relative to the project root, with a leading separator.
    pub path: String,
    /// Raw file content.
    pub content: Vec<u8>,
}

/// Capability for locating and reading project files.
pub trait ProjectContext {
    /// Root directory of the project.
    fn project_path(&self) -> &Path;

    /// Enumerate every packagable file, in a stable order.
    ///
    /// # Errors
    ///
    /// Returns [`PackError::Io`] if the project tree cannot be read.
    fn find_files(&self) -> Result<Vec<ProjectFile>>;
}

/// [`ProjectContext`] over a directory tree.
///
/// Files are enumerated in sorted path order so repeated runs see the
/// same input ordering. Previously produced artifacts (`.crx`, `.pem`)
/// are skipped so a re-pack never swallows its own outputs.
#[derive(Debug)]
pub struct DirContext {
    root: PathBuf,
}

impl DirContext {
    /// Create a context rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

fn is_artifact(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some(ext) if ext.eq_ignore_ascii_case("crx") || ext.eq_ignore_ascii_case("pem")
    )
}

impl ProjectContext for DirContext {
    fn project_path(&self) -> &Path {
        &self.root
    }

    fn find_files(&self) -> Result<Vec<ProjectFile>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(std::result::Result::ok)
        {
            if !entry.file_type().is_file() || is_artifact(entry.path()) {
                continue;
            }

            let rel = entry
                .path()
                .strip_prefix(&self.root)
                .map_err(|e| PackError::Config(format!("path outside project root: {e}")))?;
            let content = std::fs::read(entry.path())?;

            files.push(ProjectFile {
                path: format!("/{}", rel.display()),
                content,
            });
        }

        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn walks_tree_with_release_paths() {
        let tmp = tempdir().unwrap();
        std::fs::write(tmp.path().join("manifest.json"), b"{}").unwrap();
        std::fs::create_dir(tmp.path().join("js")).unwrap();
        std::fs::write(tmp.path().join("js/bg.js"), b"x").unwrap();

        let ctx = DirContext::new(tmp.path());
        let files = ctx.find_files().unwrap();
        let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();

        assert_eq!(paths, vec!["/js/bg.js", "/manifest.json"]);
    }

    #[test]
    fn skips_previous_artifacts() {
        let tmp = tempdir().unwrap();
        std::fs::write(tmp.path().join("manifest.json"), b"{}").unwrap();
        std::fs::write(tmp.path().join("extension.crx"), b"old").unwrap();
        std::fs::write(tmp.path().join("extension.pem"), b"old").unwrap();

        let ctx = DirContext::new(tmp.path());
        let files = ctx.find_files().unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, "/manifest.json");
    }

    #[test]
    fn empty_project_yields_no_files() {
        let tmp = tempdir().unwrap();
        let ctx = DirContext::new(tmp.path());
        assert!(ctx.find_files().unwrap().is_empty());
    }
}
