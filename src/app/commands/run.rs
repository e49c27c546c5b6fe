//! Run goal: execute a single target, forwarding trailing arguments to it.

use tracing::debug;

use crate::app::AppContext;
use crate::domain::AppError;
use crate::domain::target::qualify_checked;
use crate::ports::BuildToolPort;

/// Execute the run goal, returning Pants' exit code.
pub fn execute<B: BuildToolPort>(
    ctx: &AppContext<B>,
    target: &str,
    run_args: &[String],
) -> Result<i32, AppError> {
    let qualified = qualify_checked(ctx.rel_cwd(), &[target.to_string()])?;
    debug!("targets: {qualified}");

    let mut args = format!("run {qualified}");
    if !run_args.is_empty() {
        args.push(' ');
        args.push_str(&run_args.join(" "));
    }

    ctx.build_tool().stream(&args)
}
