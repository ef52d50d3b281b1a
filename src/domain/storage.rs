use super::record::{Record, ResultSet};
use crate::error::Result;
use std::path::PathBuf;

/// Destination of a finished result set.
pub trait Storage {
    /// Writes the records of `R` to its output location, replacing any
    /// previous content, and returns the path written.
    fn save_records<R: Record>(&self, results: &ResultSet<R>) -> Result<PathBuf>;
}
