//! Roster model
//!
//! Derives the selectable attribute categories from an uploaded roster's
//! column headers. The first column is always the entity's display name.

use csv::{ReaderBuilder, StringRecord, Trim};
use shared::SharedError;

use crate::error::{OrchestratorError, OrchestratorResult, ValidationError};

/// A selectable attribute column
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    /// 0-based position among attribute columns
    pub index: usize,
    /// Column header, verbatim
    pub name: String,
    pub selected: bool,
    /// In [0, 1]; only meaningful while `selected`
    pub weight: f64,
}

impl Category {
    fn unselected(index: usize, name: String) -> Self {
        Self {
            index,
            name,
            selected: false,
            weight: 0.0,
        }
    }
}

/// Parsed roster headers plus the source reference issued at upload time
#[derive(Debug, Clone, PartialEq)]
pub struct RosterModel {
    headers: Vec<String>,
    source_reference: String,
    /// Display names, when the roster content is available locally
    entities: Option<Vec<String>>,
}

impl RosterModel {
    pub fn new(headers: Vec<String>, source_reference: impl Into<String>) -> Result<Self, ValidationError> {
        if headers.len() < 2 {
            return Err(ValidationError::TooFewColumns { found: headers.len() });
        }
        Ok(Self {
            headers,
            source_reference: source_reference.into(),
            entities: None,
        })
    }

    /// Attach the roster's display names so partition coverage can be verified
    pub fn with_entities(mut self, entities: Vec<String>) -> Self {
        self.entities = Some(entities);
        self
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn source_reference(&self) -> &str {
        &self.source_reference
    }

    pub fn entities(&self) -> Option<&[String]> {
        self.entities.as_deref()
    }

    /// Fresh, unselected categories for this roster
    pub fn categories(&self) -> Vec<Category> {
        // headers are validated in `new`, so this cannot fail
        categories_from_headers(&self.headers).unwrap_or_default()
    }
}

/// Map headers to categories, dropping the leading name column
pub fn categories_from_headers(headers: &[String]) -> Result<Vec<Category>, ValidationError> {
    if headers.len() < 2 {
        return Err(ValidationError::TooFewColumns { found: headers.len() });
    }

    Ok(headers
        .iter()
        .enumerate()
        .skip(1)
        .map(|(position, name)| Category::unselected(position - 1, name.clone()))
        .collect())
}

/// One roster row: display name plus its attribute values by column
#[derive(Debug, Clone, PartialEq)]
pub struct RosterEntry {
    pub name: String,
    pub values: Vec<f64>,
}

impl RosterEntry {
    /// Value in attribute column `index`; absent columns count as zero
    pub fn value(&self, index: usize) -> f64 {
        self.values.get(index).copied().unwrap_or(0.0)
    }
}

/// Non-blank CSV records, header row first
fn records(content: &str) -> csv::Result<Vec<StringRecord>> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .trim(Trim::All)
        .from_reader(content.as_bytes());

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result?;
        if !record.iter().all(str::is_empty) {
            records.push(record);
        }
    }
    Ok(records)
}

/// Display names from roster text: the first field of every non-blank data row
///
/// Unreadable text yields no names; the service reports the roster problem.
pub fn entities_from_csv(content: &str) -> Vec<String> {
    records(content)
        .unwrap_or_default()
        .iter()
        .skip(1)
        .map(|record| record.get(0).unwrap_or_default().to_string())
        .collect()
}

/// Every data row with its numeric attribute values
pub fn entries_from_csv(content: &str) -> OrchestratorResult<Vec<RosterEntry>> {
    let records = records(content).map_err(|e| roster_error(e.to_string()))?;

    records
        .iter()
        .skip(1)
        .map(|record| {
            let mut fields = record.iter();
            let name = fields.next().unwrap_or_default().to_string();
            let values = fields
                .map(|raw| {
                    raw.parse::<f64>()
                        .ok()
                        .filter(|value| value.is_finite())
                        .ok_or_else(|| roster_error(format!("value '{raw}' for {name} is not a number")))
                })
                .collect::<OrchestratorResult<Vec<f64>>>()?;
            Ok(RosterEntry { name, values })
        })
        .collect()
}

fn roster_error(message: String) -> OrchestratorError {
    SharedError::DeserializationError { message }.into()
}
