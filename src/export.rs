use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{RepoStatsError, Result};
use crate::models::RepositoryRecord;

pub const CSV_HEADER: &str = "Name, Description,Language, Stars";

pub fn export_file_name(username: &str) -> String {
    format!("{}_repos.csv", username)
}

/// Fields of one row. Commas in the description become spaces so the row
/// keeps four columns; the other fields are written as-is.
pub fn csv_fields(record: &RepositoryRecord) -> [String; 4] {
    [
        record.name.clone(),
        record.description.replace(',', " "),
        record.language.clone(),
        record.stars.to_string(),
    ]
}

/// Header line then one unquoted row per record, `\n`-terminated
pub fn write_csv<W: Write>(out: W, records: &[RepositoryRecord]) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(out);

    writer.write_record(CSV_HEADER.split(','))?;
    for record in records {
        writer.write_record(csv_fields(record))?;
    }
    writer.flush()?;
    Ok(())
}

/// Write `{username}_repos.csv` into `dir` and return its path
pub fn save_csv(dir: &Path, username: &str, records: &[RepositoryRecord]) -> Result<PathBuf> {
    let path = dir.join(export_file_name(username));

    let file = File::create(&path)
        .map_err(|e| RepoStatsError::FileWriteFailure(format!("{}: {}", path.display(), e)))?;
    write_csv(file, records)?;

    info!("Saved {} rows to {}", records.len(), path.display());
    Ok(path)
}
