//! CSV export of a partition result
//!
//! Format: a `Team Number,Member Name` header, then one row per member in
//! team order and member order as returned by the service. Names that
//! contain a comma, quote or line break are double-quoted.

use std::io;

use chrono::NaiveDate;
use csv::{ReaderBuilder, Writer};
use shared::{SharedError, Team};

use crate::error::{OrchestratorError, OrchestratorResult};

pub const CSV_HEADER: &str = "Team Number,Member Name";

const COLUMNS: [&str; 2] = ["Team Number", "Member Name"];

/// Serialize teams to the export format
pub fn to_csv(teams: &[Team]) -> OrchestratorResult<String> {
    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record(COLUMNS).map_err(io::Error::from)?;
    for team in teams {
        let number = team.team_number.to_string();
        for member in &team.members {
            writer
                .write_record([number.as_str(), member.as_str()])
                .map_err(io::Error::from)?;
        }
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

/// Read an export back into `(team_number, member)` pairs, in file order
pub fn parse_csv(content: &str) -> OrchestratorResult<Vec<(u32, String)>> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(content.as_bytes());

    let headers = reader.headers().map_err(|e| parse_error(e.to_string()))?;
    if headers.iter().ne(COLUMNS) {
        return Err(parse_error(format!("missing '{CSV_HEADER}' header")));
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| parse_error(e.to_string()))?;
        let raw_number = record.get(0).unwrap_or_default();
        let team_number = raw_number
            .trim()
            .parse::<u32>()
            .map_err(|e| parse_error(format!("bad team number '{raw_number}': {e}")))?;
        rows.push((team_number, record.get(1).unwrap_or_default().to_string()));
    }

    Ok(rows)
}

/// Default download file name, e.g. `team-maker-teams-2024-05-01.csv`
pub fn default_file_name(date: NaiveDate) -> String {
    format!("team-maker-teams-{}.csv", date.format("%Y-%m-%d"))
}

fn parse_error(message: String) -> OrchestratorError {
    SharedError::DeserializationError { message }.into()
}
