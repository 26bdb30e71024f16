use chrono::{DateTime, SecondsFormat, Utc};
use csv::{Terminator, WriterBuilder};

use crate::{errors::AppError, models::Vote};

pub const CSV_HEADER: [&str; 4] = ["id", "created_at", "origem", "nota"];
pub const CSV_FILENAME: &str = "votos.csv";

/// Same shape as JavaScript's `toISOString`, e.g. `2024-05-01T12:30:00.000Z`.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Serializes votes in the order given, header first. Null origins become
/// empty fields.
pub fn votes_to_csv(votes: &[Vote]) -> Result<Vec<u8>, AppError> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;

    for vote in votes {
        writer.write_record([
            vote.id.to_string(),
            format_timestamp(vote.created_at),
            vote.origem.clone().unwrap_or_default(),
            vote.nota.to_string(),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| AppError::CsvError(format!("Failed to flush CSV: {}", e)))
}
