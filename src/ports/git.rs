use std::path::PathBuf;

use crate::domain::AppError;

pub trait GitPort {
    /// Absolute path of the repository toplevel.
    fn toplevel(&self) -> Result<PathBuf, AppError>;
}
