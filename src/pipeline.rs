use std::io::Write;
use std::path::PathBuf;

use tracing::{info, info_span, warn};

use crate::config::Config;
use crate::error::Result;
use crate::extract::FieldExtractor;
use crate::loader::{self, SkippedFile, SourceFile};
use crate::metrics::ConvertMetrics;
use crate::table::{DealRecord, TableWriter};

/// Outcome of a conversion run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub files_matched: usize,
    pub files_read: usize,
    pub skipped: Vec<SkippedFile>,
    pub listings: usize,
    pub output_path: PathBuf,
}

/// Extract every listing in file order, then array order.
pub fn convert_sources(extractor: &FieldExtractor, sources: &[SourceFile]) -> Vec<DealRecord> {
    sources
        .iter()
        .flat_map(|source| source.listings.iter())
        .map(|listing| extractor.extract(listing))
        .collect()
}

/// Write every record through `table` and flush; returns the row count.
pub fn write_table<W: Write>(mut table: TableWriter<W>, records: &[DealRecord]) -> Result<usize> {
    for record in records {
        table.write_record(record)?;
    }
    table.finish()
}

/// Discover, load, extract and write, per `config`.
///
/// All inputs are loaded before the output file is touched, so an aborted run
/// never leaves a partial CSV behind.
pub fn run(config: &Config) -> Result<RunSummary> {
    let span = info_span!("convert", input = %config.input_glob);
    let _enter = span.enter();

    let paths = loader::discover(&config.input_glob)?;
    let (sources, skipped) = loader::load_all(&paths, config.on_bad_file)?;

    let extractor = FieldExtractor::new(config.extract.clone());
    let records = convert_sources(&extractor, &sources);
    ConvertMetrics::listings_converted(records.len());

    let table = TableWriter::create(&config.output_path, config.layout)?;
    let rows = write_table(table, &records)?;
    ConvertMetrics::rows_written(rows);

    if !skipped.is_empty() {
        warn!("{} input files were skipped", skipped.len());
    }
    info!(
        "Wrote {} listings from {} files to {}",
        rows,
        sources.len(),
        config.output_path.display()
    );

    Ok(RunSummary {
        files_matched: paths.len(),
        files_read: sources.len(),
        skipped,
        listings: rows,
        output_path: config.output_path.clone(),
    })
}
