use anyhow::{Context, Result};
use clap::ValueEnum;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::rank::ResultRow;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Csv,
    Jsonl,
}

/// Writes rows as CSV. The header row is written even when `rows` is empty.
pub fn write_csv<W: Write>(rows: &[ResultRow], writer: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(ResultRow::HEADERS)
        .context("Failed to write CSV header")?;
    for row in rows {
        wtr.serialize(row).context("Failed to write CSV record")?;
    }

    wtr.flush().context("Failed to flush CSV")?;
    Ok(())
}

pub fn write_jsonl<W: Write>(rows: &[ResultRow], mut writer: W) -> Result<()> {
    for row in rows {
        serde_json::to_writer(&mut writer, row)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Opens `path` for buffered writing, or stdout when no path is given.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

pub fn write_rows(rows: &[ResultRow], format: OutputFormat, path: Option<&Path>) -> Result<()> {
    let writer = open_output(path)?;
    match format {
        OutputFormat::Csv => write_csv(rows, writer),
        OutputFormat::Jsonl => write_jsonl(rows, writer),
    }
}
