//! chaps: a relative-directory wrapper around the Pants build system.
//!
//! Pants wants fully-qualified targets (`path/from/root:name`); chaps lets
//! you type `:name` from wherever you sit inside the repository and fills
//! in the path. Goals map onto Pants goals: `binary`, `fmt`, `list`,
//! `repl`, `run`, and `test`.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::env;

use adapters::{GitCommandAdapter, PantsCommandAdapter};
use app::commands::{binary, fmt, list, repl, run, test};
use app::{AppContext, RepoWorkspace};

pub use app::commands::test::TestOptions;
pub use domain::AppError;

fn context() -> Result<AppContext<PantsCommandAdapter>, AppError> {
    let cwd = env::current_dir()?;
    let git = GitCommandAdapter::new(cwd.clone());
    let workspace = RepoWorkspace::discover(&git, &cwd)?;
    let pants = PantsCommandAdapter::new(workspace.root().to_path_buf());
    Ok(AppContext::new(workspace, pants))
}

/// Build a binary for the given bare targets, returning Pants' exit code.
pub fn binary(targets: &[String]) -> Result<i32, AppError> {
    binary::execute(&context()?, targets)
}

/// Fix common format issues for the given bare targets.
pub fn fmt(targets: &[String]) -> Result<i32, AppError> {
    fmt::execute(&context()?, targets)
}

/// Print targets under the current directory as bare `:name` references.
pub fn list() -> Result<i32, AppError> {
    list::execute(&context()?)
}

/// Drop into an iPython REPL with the given bare targets loaded.
pub fn repl(targets: &[String]) -> Result<i32, AppError> {
    repl::execute(&context()?, targets)
}

/// Run a single bare target, forwarding trailing arguments to it.
pub fn run(target: &str, run_args: &[String]) -> Result<i32, AppError> {
    run::execute(&context()?, target, run_args)
}

/// Run tests through the `test.pytest` goal.
pub fn test(targets: &[String], options: &TestOptions) -> Result<i32, AppError> {
    test::execute(&context()?, targets, options)
}
