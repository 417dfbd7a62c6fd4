//! Round-trip export: the processed table back out in the input wire format
//! (newline-separated rows of tab-separated cells).

use std::path::Path;

use anyhow::{Context, Result};

use crate::models::StockRecord;

/// Serialize headers plus display rows as tab-separated text.
pub fn serialize(headers: &[String], records: &[StockRecord]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(csv::QuoteStyle::Never)
        .flexible(true)
        .from_writer(Vec::new());

    writer.write_record(headers)?;
    for record in records {
        writer.write_record(&record.raw)?;
    }

    let bytes = writer.into_inner().context("flushing export buffer")?;
    String::from_utf8(bytes).context("export produced invalid UTF-8")
}

/// Write the processed table to a file.
pub fn write_tsv(path: &Path, headers: &[String], records: &[StockRecord]) -> Result<()> {
    let text = serialize(headers, records)?;
    std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
