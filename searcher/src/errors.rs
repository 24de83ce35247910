use std::time;
use thiserror::Error;

/// Error produced when a search is stopped before it could finish.
///
/// A search which exhausts its frontier without reaching a goal
/// is not an error, it returns `None` instead.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Step limit exhausted after {0} steps")]
    StepLimitExhausted(usize),

    #[error("Time limit exhausted after {0:?}")]
    TimeLimitExhausted(time::Duration),
}

/// Result when a search method might fail.
pub type Result<T> = std::result::Result<T, SearchError>;
