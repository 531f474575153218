// crates/geoids-core/src/stats.rs

use serde::{Deserialize, Serialize};

/// Aggregate counters for one transform run.
///
/// Returned by [`DatasetTransformer::run_in_dir`](crate::DatasetTransformer::run_in_dir);
/// `city_lines + country_lines` equals the number of lines in the output
/// file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformStats {
    pub city_lines: usize,
    pub country_lines: usize,
    /// City rows dropped by the empty-name or short-row policies.
    pub skipped_rows: usize,
}

impl TransformStats {
    pub fn total_lines(&self) -> usize {
        self.city_lines + self.country_lines
    }
}
