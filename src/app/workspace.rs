//! Repository workspace resolution: where the repository root is and where
//! the caller sits relative to it.

use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::GitPort;

/// A resolved repository workspace, computed once per invocation.
#[derive(Debug, Clone)]
pub struct RepoWorkspace {
    root: PathBuf,
    rel_cwd: String,
}

impl RepoWorkspace {
    /// Create a workspace from an already-resolved root and relative path.
    pub fn new(root: PathBuf, rel_cwd: impl Into<String>) -> Self {
        Self { root, rel_cwd: rel_cwd.into() }
    }

    /// Resolve the repository root through git and relate `cwd` to it.
    pub fn discover(git: &impl GitPort, cwd: &Path) -> Result<Self, AppError> {
        let root = git.toplevel()?;
        let root = root.canonicalize().unwrap_or(root);
        let cwd = cwd.canonicalize()?;
        let rel_cwd = relative_path(&root, &cwd)?;
        Ok(Self::new(root, rel_cwd))
    }

    /// Absolute path of the repository root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Relative path from the root to the invocation directory (`"."` at
    /// the root itself).
    pub fn rel_cwd(&self) -> &str {
        &self.rel_cwd
    }
}

fn relative_path(root: &Path, cwd: &Path) -> Result<String, AppError> {
    let rel = cwd.strip_prefix(root).map_err(|_| {
        AppError::Configuration(format!(
            "working directory {} is not inside repository root {}",
            cwd.display(),
            root.display()
        ))
    })?;

    if rel.as_os_str().is_empty() {
        Ok(".".to_string())
    } else {
        Ok(rel.to_string_lossy().into_owned())
    }
}
