pub mod git_command;
pub mod pants_command;

pub use git_command::GitCommandAdapter;
pub use pants_command::PantsCommandAdapter;
