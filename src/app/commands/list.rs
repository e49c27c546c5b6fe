//! List goal: print targets under the caller's directory as bare `:name`
//! references.

use crate::app::AppContext;
use crate::domain::AppError;
use crate::domain::target::bare_targets;
use crate::ports::BuildToolPort;

/// Execute the list goal, printing one bare target per line.
pub fn execute<B: BuildToolPort>(ctx: &AppContext<B>) -> Result<i32, AppError> {
    let listing = ctx.build_tool().capture(&format!("list {}:", ctx.rel_cwd()))?;

    for target in bare_targets(&listing) {
        println!("{target}");
    }

    Ok(0)
}
