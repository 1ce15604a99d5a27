pub mod error;
pub mod file_walker;
pub mod validation;

pub use error::FinderError;
pub use file_walker::{find_by_min_size, find_by_name, FileMatch, TraversalConfig, WalkOutcome};
pub use validation::{
    validate_byte_size, validate_directory, validate_pattern, validate_search_mode, NamePattern,
    SearchMode,
};
