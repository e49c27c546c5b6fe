use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::GitPort;

/// Test double for `GitPort` with a fixed toplevel.
pub struct FakeGit {
    toplevel: Option<PathBuf>,
}

impl FakeGit {
    pub fn new(toplevel: PathBuf) -> Self {
        Self { toplevel: Some(toplevel) }
    }

    /// A git that reports no repository context.
    pub fn failing() -> Self {
        Self { toplevel: None }
    }
}

impl GitPort for FakeGit {
    fn toplevel(&self) -> Result<PathBuf, AppError> {
        self.toplevel.clone().ok_or(AppError::NotARepository)
    }
}
