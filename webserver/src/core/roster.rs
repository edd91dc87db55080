//! Roster CSV parsing
//!
//! Rows are `name, score, score, ...`. Standard CSV quoting applies, so a
//! name may itself contain a comma. Blank lines are skipped, including any
//! before the header.

use csv::{ReaderBuilder, StringRecord, Trim};
use shared::CategoryWeight;

use crate::error::{WebServerError, WebServerResult};

/// One roster row with its numeric attributes
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub name: String,
    pub scores: Vec<f64>,
}

impl Person {
    /// Σ score[index] × weight over the requested categories
    pub fn weighted_score(&self, categories: &[CategoryWeight]) -> f64 {
        categories
            .iter()
            .map(|category| self.scores.get(category.index as usize).copied().unwrap_or(0.0) * category.weight)
            .sum()
    }
}

/// A person paired with the score used for ordering
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredPerson {
    pub name: String,
    pub score: f64,
}

fn clean_field(field: &str) -> String {
    field.replace(['\r', '\n'], "").trim().to_string()
}

/// Non-blank records in file order, header row first
fn records(content: &str) -> WebServerResult<Vec<StringRecord>> {
    let mut reader = ReaderBuilder::new()
        .flexible(true) // rows may be shorter than the header
        .has_headers(false)
        .trim(Trim::All)
        .from_reader(content.as_bytes());

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| WebServerError::invalid_csv(e.to_string()))?;
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        records.push(record);
    }
    Ok(records)
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|position| position.line()).unwrap_or_default()
}

/// Column labels from the first non-blank row
pub fn parse_headers(content: &str) -> WebServerResult<Vec<String>> {
    let records = records(content)?;
    let first = records
        .first()
        .ok_or_else(|| WebServerError::invalid_csv("file is empty"))?;

    Ok(first.iter().map(clean_field).collect())
}

/// Every row after the header as a person with parsed scores
pub fn parse_people(content: &str) -> WebServerResult<Vec<Person>> {
    records(content)?
        .iter()
        .skip(1)
        .map(|record| {
            let mut fields = record.iter();
            let name = fields.next().map(clean_field).unwrap_or_default();
            let scores = fields
                .map(|raw| {
                    let value = clean_field(raw);
                    value.parse::<f64>().ok().filter(|score| score.is_finite()).ok_or_else(|| {
                        WebServerError::invalid_csv(format!(
                            "line {}: score '{}' for {} is not a number",
                            line_of(record),
                            value,
                            name
                        ))
                    })
                })
                .collect::<WebServerResult<Vec<f64>>>()?;
            Ok(Person { name, scores })
        })
        .collect()
}

/// Reject categories that point past the last score column
pub fn check_categories(headers: &[String], categories: &[CategoryWeight]) -> WebServerResult<()> {
    let available = headers.len().saturating_sub(1);
    for category in categories {
        if category.index as usize >= available {
            return Err(WebServerError::invalid_request(format!(
                "Category index {} ({}) is out of range; the roster has {} categories",
                category.index, category.name, available
            )));
        }
    }
    Ok(())
}

/// Score everyone for the requested categories
///
/// A row without a value for a requested category is invalid.
pub fn score_people(people: &[Person], categories: &[CategoryWeight]) -> WebServerResult<Vec<ScoredPerson>> {
    people
        .iter()
        .map(|person| {
            if let Some(missing) = categories
                .iter()
                .find(|category| category.index as usize >= person.scores.len())
            {
                return Err(WebServerError::invalid_csv(format!(
                    "{} has no value for {}",
                    person.name, missing.name
                )));
            }
            Ok(ScoredPerson {
                name: person.name.clone(),
                score: person.weighted_score(categories),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROSTER: &str = "Name, Skill ,Speed\r\nAna,9,2\r\n\r\nBen,3,8\r\n";

    fn weight(index: u32, weight: f64, name: &str) -> CategoryWeight {
        CategoryWeight {
            index,
            weight,
            name: name.to_string(),
        }
    }

    #[test]
    fn test_parse_headers_trims_and_strips_line_breaks() {
        assert_eq!(parse_headers(ROSTER).unwrap(), vec!["Name", "Skill", "Speed"]);
    }

    #[test]
    fn test_parse_headers_empty_file() {
        let err = parse_headers(" \n\n").unwrap_err();
        assert_eq!(err.to_string(), "Invalid CSV: file is empty");
    }

    #[test]
    fn test_parse_people_skips_blank_lines() {
        let people = parse_people(ROSTER).unwrap();
        assert_eq!(people.len(), 2);
        assert_eq!(people[1].name, "Ben");
        assert_eq!(people[1].scores, vec![3.0, 8.0]);
    }

    #[test]
    fn test_parse_people_rejects_non_numeric_score() {
        let err = parse_people("Name,Skill\nAna,high\n").unwrap_err();
        assert!(err.to_string().starts_with("Invalid CSV"));
        assert!(err.to_string().contains("'high'"));
    }

    #[test]
    fn test_quoted_name_keeps_its_comma() {
        let people = parse_people("Name,Skill\n\"Doe, John\",5\n").unwrap();
        assert_eq!(people.len(), 1);
        assert_eq!(people[0].name, "Doe, John");
        assert_eq!(people[0].scores, vec![5.0]);
    }

    #[test]
    fn test_leading_blank_line_before_header() {
        let content = "\nName,Skill\nAna,5\nBen,3\n";

        assert_eq!(parse_headers(content).unwrap(), vec!["Name", "Skill"]);
        let people = parse_people(content).unwrap();
        assert_eq!(
            people.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(),
            vec!["Ana", "Ben"]
        );
    }

    #[test]
    fn test_weighted_score() {
        let people = parse_people(ROSTER).unwrap();
        let categories = vec![weight(0, 0.5, "Skill"), weight(1, 0.5, "Speed")];
        assert!((people[0].weighted_score(&categories) - 5.5).abs() < 1e-9);
    }

    #[test]
    fn test_check_categories_out_of_range() {
        let headers = parse_headers(ROSTER).unwrap();
        assert!(check_categories(&headers, &[weight(1, 1.0, "Speed")]).is_ok());
        assert!(check_categories(&headers, &[weight(2, 1.0, "Ghost")]).is_err());
    }

    #[test]
    fn test_score_people_short_row() {
        let people = parse_people("Name,Skill,Speed\nAna,9\n").unwrap();
        let err = score_people(&people, &[weight(1, 1.0, "Speed")]).unwrap_err();
        assert!(err.to_string().contains("no value for Speed"));
    }
}
