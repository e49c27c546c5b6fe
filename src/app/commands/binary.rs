//! Binary goal: build a deployable binary for targets in the caller's
//! directory.

use tracing::debug;

use crate::app::AppContext;
use crate::domain::AppError;
use crate::domain::target::qualify_checked;
use crate::ports::BuildToolPort;

/// Execute the binary goal, returning Pants' exit code.
pub fn execute<B: BuildToolPort>(ctx: &AppContext<B>, targets: &[String]) -> Result<i32, AppError> {
    let qualified = qualify_checked(ctx.rel_cwd(), targets)?;
    debug!("targets: {qualified}");

    ctx.build_tool().stream(&format!("binary {qualified}"))
}
