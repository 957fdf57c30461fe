//! Run counters.
//!
//! Recorded through the `metrics` facade; they are no-ops unless the host
//! process installs a recorder.

pub const FILES_READ: &str = "deal_csv_files_read_total";
pub const FILES_SKIPPED: &str = "deal_csv_files_skipped_total";
pub const LISTINGS_CONVERTED: &str = "deal_csv_listings_converted_total";
pub const ROWS_WRITTEN: &str = "deal_csv_rows_written_total";

/// Metrics for the load/convert/write run
pub struct ConvertMetrics;

impl ConvertMetrics {
    pub fn file_read() {
        ::metrics::counter!(FILES_READ).increment(1);
    }

    pub fn listings_converted(listings: usize) {
        ::metrics::counter!(LISTINGS_CONVERTED).increment(listings as u64);
    }

    pub fn file_skipped() {
        ::metrics::counter!(FILES_SKIPPED).increment(1);
    }

    pub fn rows_written(rows: usize) {
        ::metrics::counter!(ROWS_WRITTEN).increment(rows as u64);
    }

    pub fn names() -> [&'static str; 4] {
        [FILES_READ, FILES_SKIPPED, LISTINGS_CONVERTED, ROWS_WRITTEN]
    }
}
