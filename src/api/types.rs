//! Project dataset types.
//!
//! The dataset uses dotted JSON keys (`percentage.funded`, `amt.pledged`).
//! They are mapped to named fields here and nowhere else.

use serde::Deserialize;
use std::fmt;

/// A single crowdfunding project row.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    /// Unique identifier of the project.
    pub id: String,
    /// Funding progress in percent (may exceed 100).
    pub percentage_funded: f64,
    /// Total amount pledged.
    pub amount_pledged: f64,
}

impl Project {
    /// Create a new project.
    pub fn new(id: impl Into<String>, percentage_funded: f64, amount_pledged: f64) -> Self {
        Self {
            id: id.into(),
            percentage_funded,
            amount_pledged,
        }
    }
}

/// A project identifier as it appears on the wire.
///
/// Some datasets use strings, others plain serial numbers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    /// A string identifier.
    Text(String),
    /// A numeric identifier.
    Number(serde_json::Number),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Text(s) => f.write_str(s),
            RecordId::Number(n) => write!(f, "{}", n),
        }
    }
}

/// A project record exactly as returned by the data endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RawProject {
    /// Identifier.
    #[serde(default)]
    pub id: Option<RecordId>,
    /// Serial number; the live dataset carries this instead of `id`.
    #[serde(default, rename = "s.no")]
    pub serial: Option<RecordId>,
    /// Funding progress in percent.
    #[serde(rename = "percentage.funded")]
    pub percentage_funded: f64,
    /// Amount pledged.
    #[serde(rename = "amt.pledged")]
    pub amount_pledged: f64,
}

/// Convert wire records into projects.
///
/// The identifier is `id`, then `s.no`, then the position in the array.
pub fn into_projects(raw: Vec<RawProject>) -> Vec<Project> {
    raw.into_iter()
        .enumerate()
        .map(|(index, record)| {
            let id = record
                .id
                .or(record.serial)
                .map(|id| id.to_string())
                .unwrap_or_else(|| index.to_string());
            Project::new(id, record.percentage_funded, record.amount_pledged)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> Vec<Project> {
        let raw: Vec<RawProject> = serde_json::from_str(json).unwrap();
        into_projects(raw)
    }

    #[test]
    fn test_decode_string_ids() {
        let projects = decode(
            r#"[{"id": "p-1", "percentage.funded": 186, "amt.pledged": 15823}]"#,
        );
        assert_eq!(projects, vec![Project::new("p-1", 186.0, 15823.0)]);
    }

    #[test]
    fn test_decode_serial_number_alias() {
        let projects = decode(
            r#"[
                {"s.no": 0, "percentage.funded": 186, "amt.pledged": 15823, "title": "Ignored"},
                {"s.no": 1, "percentage.funded": 8, "amt.pledged": 6859.5}
            ]"#,
        );
        assert_eq!(projects[0].id, "0");
        assert_eq!(projects[1].id, "1");
        assert_eq!(projects[1].amount_pledged, 6859.5);
    }

    #[test]
    fn test_decode_prefers_id_over_serial_number() {
        let projects = decode(
            r#"[{"id": "p-1", "s.no": 0, "percentage.funded": 186, "amt.pledged": 15823}]"#,
        );
        assert_eq!(projects, vec![Project::new("p-1", 186.0, 15823.0)]);
    }

    #[test]
    fn test_decode_missing_id_uses_position() {
        let projects = decode(
            r#"[
                {"percentage.funded": 1, "amt.pledged": 2},
                {"percentage.funded": 3, "amt.pledged": 4}
            ]"#,
        );
        assert_eq!(projects[0].id, "0");
        assert_eq!(projects[1].id, "1");
    }

    #[test]
    fn test_decode_rejects_missing_amount() {
        let result: Result<Vec<RawProject>, _> =
            serde_json::from_str(r#"[{"id": "x", "percentage.funded": 1}]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_record_id_display() {
        assert_eq!(RecordId::Text("abc".to_string()).to_string(), "abc");
        assert_eq!(RecordId::Number(42.into()).to_string(), "42");
    }
}
