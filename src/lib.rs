pub mod config;
pub mod constants;
pub mod error;
pub mod extract;
pub mod listing;
pub mod loader;
pub mod logging;
pub mod metrics;
pub mod pipeline;
pub mod table;

pub use config::Config;
pub use error::{DealCsvError, Result};
pub use extract::{ExtractOptions, FieldExtractor};
pub use listing::ListingRecord;
pub use pipeline::{run, RunSummary};
pub use table::{DealRecord, Layout};
