use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use tracing::info;

use super::columns::Layout;
use super::record::DealRecord;
use crate::error::Result;

/// Streams deal records to CSV in a fixed column order.
///
/// The header row is written on construction, so even an empty run yields a
/// well-formed file.
pub struct TableWriter<W: Write> {
    inner: csv::Writer<W>,
    layout: Layout,
    rows: usize,
}

impl TableWriter<File> {
    /// Create (or truncate) `path`, making parent directories as needed.
    pub fn create(path: &Path, layout: Layout) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        info!("Writing {} CSV to {}", layout_name(layout), path.display());
        Self::from_writer(File::create(path)?, layout)
    }
}

impl<W: Write> TableWriter<W> {
    pub fn from_writer(writer: W, layout: Layout) -> Result<Self> {
        let mut inner = csv::WriterBuilder::new()
            .quote_style(csv::QuoteStyle::Necessary)
            .from_writer(writer);
        inner.write_record(layout.headers())?;
        Ok(Self {
            inner,
            layout,
            rows: 0,
        })
    }

    pub fn write_record(&mut self, record: &DealRecord) -> Result<()> {
        self.inner.write_record(record.to_row(self.layout))?;
        self.rows += 1;
        Ok(())
    }

    pub fn finish(mut self) -> Result<usize> {
        self.inner.flush()?;
        Ok(self.rows)
    }
}

fn layout_name(layout: Layout) -> &'static str {
    match layout {
        Layout::Minimal => "minimal",
        Layout::Extended => "extended",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::FieldExtractor;
    use crate::listing::ListingRecord;
    use serde_json::json;

    fn render(layout: Layout, listings: &[serde_json::Value]) -> String {
        let extractor = FieldExtractor::default();
        let mut buf = Vec::new();
        let mut writer = TableWriter::from_writer(&mut buf, layout).unwrap();
        for l in listings {
            writer
                .write_record(&extractor.extract(&ListingRecord::new(l.clone())))
                .unwrap();
        }
        assert_eq!(writer.finish().unwrap(), listings.len());
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_header_only() {
        let out = render(Layout::Minimal, &[]);
        assert_eq!(out.lines().count(), 1);
        assert!(out.starts_with("address,zip_code,days_on_market,"));
    }

    #[test]
    fn test_empty_listing_row_is_full_width() {
        let out = render(Layout::Extended, &[json!({})]);
        let row = out.lines().nth(1).unwrap();
        assert_eq!(row.split(',').count(), 49);
    }

    #[test]
    fn test_delimiter_in_text_is_quoted_numbers_are_not() {
        let out = render(
            Layout::Minimal,
            &[json!({"city": "Austin", "zip": "78701", "price": {"value": 350000}})],
        );
        let row = out.lines().nth(1).unwrap();
        assert!(row.starts_with("\"Austin, 78701\",78701,,,,350000,"));
    }
}
