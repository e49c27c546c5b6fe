use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::BuildToolPort;

/// Test double for `BuildToolPort` recording every invocation.
#[derive(Default)]
pub struct FakeBuildTool {
    pub streamed: Mutex<Vec<String>>,
    pub captured: Mutex<Vec<String>>,
    pub exit_code: i32,
    pub listing: String,
}

impl FakeBuildTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_listing(listing: &str) -> Self {
        Self { listing: listing.to_string(), ..Self::default() }
    }

    pub fn with_exit_code(exit_code: i32) -> Self {
        Self { exit_code, ..Self::default() }
    }

    pub fn last_streamed(&self) -> Option<String> {
        self.streamed.lock().unwrap().last().cloned()
    }
}

impl BuildToolPort for FakeBuildTool {
    fn stream(&self, args: &str) -> Result<i32, AppError> {
        self.streamed.lock().unwrap().push(args.to_string());
        Ok(self.exit_code)
    }

    fn capture(&self, args: &str) -> Result<String, AppError> {
        self.captured.lock().unwrap().push(args.to_string());
        Ok(self.listing.clone())
    }
}
