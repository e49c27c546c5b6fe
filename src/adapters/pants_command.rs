use std::path::PathBuf;
use std::process::Command;

use crate::domain::AppError;
use crate::ports::BuildToolPort;

/// Invokes `./pants` from the repository root.
///
/// The assembled argument string is split on whitespace; goal keywords,
/// flags, and targets never contain spaces.
#[derive(Debug, Clone)]
pub struct PantsCommandAdapter {
    root: PathBuf,
}

impl PantsCommandAdapter {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn command(&self, args: &str) -> Command {
        let mut command = Command::new(self.root.join("pants"));
        command.args(args.split_whitespace());
        command.current_dir(&self.root);
        command
    }

    fn invocation(&self, args: &str) -> String {
        format!("./pants {args}")
    }
}

impl BuildToolPort for PantsCommandAdapter {
    fn stream(&self, args: &str) -> Result<i32, AppError> {
        let status = self.command(args).status().map_err(|e| AppError::PantsError {
            command: self.invocation(args),
            details: e.to_string(),
        })?;

        // code() is None when the child was killed by a signal
        Ok(status.code().unwrap_or(1))
    }

    fn capture(&self, args: &str) -> Result<String, AppError> {
        let output = self.command(args).output().map_err(|e| AppError::PantsError {
            command: self.invocation(args),
            details: e.to_string(),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::PantsError {
                command: self.invocation(args),
                details: if stderr.is_empty() { "Unknown error".to_string() } else { stderr },
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}
