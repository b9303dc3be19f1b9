pub mod error;
pub mod options;
pub mod row;

pub use error::{Error, Result};
pub use options::{DedupStrategy, SimilarityMode, SimilaritySetting, SortOrder};
pub use row::LogRow;
