use crate::domain::AppError;

pub trait BuildToolPort {
    /// Run Pants with inherited stdio, returning its exit code.
    fn stream(&self, args: &str) -> Result<i32, AppError>;

    /// Run Pants non-interactively, capturing its stdout.
    fn capture(&self, args: &str) -> Result<String, AppError>;
}
