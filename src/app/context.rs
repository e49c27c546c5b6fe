use crate::app::RepoWorkspace;
use crate::ports::BuildToolPort;

/// Application context holding dependencies for goal execution.
pub struct AppContext<B: BuildToolPort> {
    workspace: RepoWorkspace,
    build_tool: B,
}

impl<B: BuildToolPort> AppContext<B> {
    /// Create a new application context.
    pub fn new(workspace: RepoWorkspace, build_tool: B) -> Self {
        Self { workspace, build_tool }
    }

    /// Get a reference to the resolved workspace.
    pub fn workspace(&self) -> &RepoWorkspace {
        &self.workspace
    }

    /// Get a reference to the build tool port.
    pub fn build_tool(&self) -> &B {
        &self.build_tool
    }

    /// Relative path from the repository root to the invocation directory.
    pub fn rel_cwd(&self) -> &str {
        self.workspace.rel_cwd()
    }
}
