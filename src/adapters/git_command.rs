use std::path::PathBuf;
use std::process::Command;

use crate::domain::AppError;
use crate::ports::GitPort;

/// Queries git by subprocess from an explicit working directory.
#[derive(Debug, Clone)]
pub struct GitCommandAdapter {
    cwd: PathBuf,
}

impl GitCommandAdapter {
    pub fn new(cwd: PathBuf) -> Self {
        Self { cwd }
    }
}

impl GitPort for GitCommandAdapter {
    fn toplevel(&self) -> Result<PathBuf, AppError> {
        let output = Command::new("git")
            .args(["rev-parse", "--show-toplevel"])
            .current_dir(&self.cwd)
            .output()
            .map_err(|e| AppError::GitError {
                command: "git rev-parse --show-toplevel".to_string(),
                details: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(AppError::NotARepository);
        }

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if stdout.is_empty() {
            return Err(AppError::NotARepository);
        }

        Ok(PathBuf::from(stdout))
    }
}
