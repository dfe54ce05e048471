use serde::Deserialize;
use std::collections::HashMap;

use super::tables::{AIRPORT_COLUMNS, ICON_CODES, SANDBOX_REGIONS};

/// Refers to a column either by name or by zero-based position
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ColumnRef {
    Index(usize),
    Name(String),
}

impl ColumnRef {
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// Resolve to a position within `columns`. Names match case-insensitively,
    /// as SQLite does.
    pub fn resolve(&self, columns: &[String]) -> Option<usize> {
        match self {
            ColumnRef::Index(idx) => (*idx < columns.len()).then_some(*idx),
            ColumnRef::Name(name) => columns.iter().position(|c| c.eq_ignore_ascii_case(name)),
        }
    }
}

impl std::fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnRef::Index(idx) => write!(f, "#{}", idx),
            ColumnRef::Name(name) => write!(f, "{}", name),
        }
    }
}

/// Layout details of one NeoFly database version.
///
/// The built-in default describes NeoFly 1.4 fed from a Little Navmap MSFS
/// database. A JSON file with any subset of these fields can replace it.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SchemaProfile {
    /// Columns copied from the navdata `airport` table
    pub airport_columns: Vec<String>,
    /// Lower-case icon file name -> mission category code
    pub icon_codes: HashMap<String, u8>,
    /// Free-text aircraft description in the legacy hangar
    pub hangar_aircraft_column: ColumnRef,
    /// Icon image path in the legacy log
    pub log_icon_column: ColumnRef,
    /// Hangar status of an aircraft sitting on the ground
    pub idle_status: i64,
    /// Leading ICAO letters seeded by the global sandbox
    pub sandbox_regions: Vec<char>,
}

impl Default for SchemaProfile {
    fn default() -> Self {
        Self {
            airport_columns: AIRPORT_COLUMNS.iter().map(|c| c.to_string()).collect(),
            icon_codes: ICON_CODES
                .iter()
                .map(|(file, code)| (file.to_string(), *code))
                .collect(),
            hangar_aircraft_column: ColumnRef::name("Aircraft"),
            log_icon_column: ColumnRef::Index(1),
            idle_status: 0,
            sandbox_regions: SANDBOX_REGIONS.to_vec(),
        }
    }
}

impl SchemaProfile {
    pub fn from_json(text: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_profile_keeps_defaults() {
        let profile = SchemaProfile::from_json(
            r#"{"log_icon_column": "image", "icon_codes": {"cargo.png": 20}}"#,
        )
        .unwrap();

        assert_eq!(profile.log_icon_column, ColumnRef::name("image"));
        assert_eq!(profile.icon_codes.get("cargo.png"), Some(&20));
        assert!(!profile.icon_codes.contains_key("vip.png"));
        assert_eq!(profile.airport_columns.len(), 67);
        assert_eq!(profile.hangar_aircraft_column, ColumnRef::name("Aircraft"));
    }

    #[test]
    fn test_column_ref_from_index() {
        let profile = SchemaProfile::from_json(r#"{"hangar_aircraft_column": 0}"#).unwrap();
        assert_eq!(profile.hangar_aircraft_column, ColumnRef::Index(0));
    }

    #[test]
    fn test_column_ref_resolve() {
        let columns = vec!["id".to_string(), "Aircraft".to_string()];
        assert_eq!(ColumnRef::name("aircraft").resolve(&columns), Some(1));
        assert_eq!(ColumnRef::Index(0).resolve(&columns), Some(0));
        assert_eq!(ColumnRef::Index(2).resolve(&columns), None);
        assert_eq!(ColumnRef::name("owner").resolve(&columns), None);
    }
}
