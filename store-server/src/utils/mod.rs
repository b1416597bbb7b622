//! Error, result, and extractor types shared by the HTTP layer

pub mod error;
pub mod extract;
pub mod result;

pub use error::{AppError, ErrorBody};
pub use extract::Json;
pub use result::AppResult;
