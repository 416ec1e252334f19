use std::io;
use std::path::Path;

use anyhow::Context;
use quote_core::OUTPUT_COLUMNS;
use serde::Serialize;

/// Пишет таблицу: заголовок из `OUTPUT_COLUMNS`, пустые ячейки для `None`.
pub(crate) fn write_rows<W: io::Write, T: Serialize>(out: W, rows: &[T]) -> csv::Result<()> {
    let mut w = csv::WriterBuilder::new().has_headers(false).from_writer(out);

    w.write_record(OUTPUT_COLUMNS)?;
    for row in rows {
        w.serialize(row)?;
    }

    w.flush()?;
    Ok(())
}

pub(crate) fn write_file<T: Serialize>(path: &Path, rows: &[T]) -> anyhow::Result<()> {
    let f = std::fs::File::create(path)
        .with_context(|| format!("failed to create output file: {:?}", path))?;
    write_rows(io::BufWriter::new(f), rows)
        .with_context(|| format!("failed to write output file: {:?}", path))
}
