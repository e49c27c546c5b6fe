pub mod error;
pub mod target;

pub use error::AppError;
