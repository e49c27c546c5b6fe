pub mod fake_build_tool;
pub mod fake_git;

#[allow(unused_imports)]
pub use fake_build_tool::FakeBuildTool;
#[allow(unused_imports)]
pub use fake_git::FakeGit;
