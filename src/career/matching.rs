//! Normalisation of NeoFly 1.3 hangar and log values into the 1.4 forms

use std::cmp::Reverse;
use std::collections::HashMap;
use std::fmt;

use crate::error::{Result, SyncError};
use crate::store::SqlValue;

/// Mission category shown by a log entry's icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconCategory {
    Code(u8),
    None,
}

impl fmt::Display for IconCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconCategory::Code(code) => write!(f, "{}", code),
            IconCategory::None => write!(f, "NONE"),
        }
    }
}

impl From<IconCategory> for SqlValue {
    fn from(category: IconCategory) -> Self {
        SqlValue::Text(category.to_string())
    }
}

/// Maps icon image paths to mission categories by file name
#[derive(Debug, Clone, Default)]
pub struct IconClassifier {
    codes: HashMap<String, u8>,
}

impl IconClassifier {
    pub fn new(codes: &HashMap<String, u8>) -> Self {
        Self {
            codes: codes
                .iter()
                .map(|(file, code)| (file.to_lowercase(), *code))
                .collect(),
        }
    }

    /// Classify by the last path segment, case-insensitively. Legacy paths
    /// are Windows paths, so both separators count. Never fails.
    pub fn classify(&self, path: &str) -> IconCategory {
        let file_name = path
            .rsplit(|c: char| c == '/' || c == '\\' || c == ':')
            .next()
            .unwrap_or(path)
            .to_lowercase();

        self.codes
            .get(&file_name)
            .map_or(IconCategory::None, |code| IconCategory::Code(*code))
    }
}

pub fn classify_icon(path: &str, codes: &HashMap<String, u8>) -> IconCategory {
    IconClassifier::new(codes).classify(path)
}

/// Resolves free-text aircraft descriptions to catalog names.
///
/// Candidates are tried longest first so "A320neo" wins over "A320". Names of
/// equal length keep their catalog order, so the earlier catalog entry wins a
/// tie. Blank names are ignored since they would match anything.
#[derive(Debug, Clone)]
pub struct AircraftMatcher {
    // (upper-cased, canonical)
    names: Vec<(String, String)>,
}

impl AircraftMatcher {
    pub fn new<I, S>(canonical_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<(String, String)> = canonical_names
            .into_iter()
            .map(Into::into)
            .filter(|name| !name.trim().is_empty())
            .map(|name| (name.to_uppercase(), name))
            .collect();

        // stable: ties stay in catalog order
        names.sort_by_key(|(_, name)| Reverse(name.chars().count()));

        Self { names }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn resolve(&self, free_text: &str) -> Result<&str> {
        let haystack = free_text.to_uppercase();
        self.names
            .iter()
            .find(|(upper, _)| haystack.contains(upper.as_str()))
            .map(|(_, name)| name.as_str())
            .ok_or_else(|| SyncError::NoMatch {
                description: free_text.to_string(),
            })
    }
}

pub fn resolve_aircraft<S: AsRef<str>>(free_text: &str, canonical_names: &[S]) -> Result<String> {
    AircraftMatcher::new(canonical_names.iter().map(|n| n.as_ref().to_string()))
        .resolve(free_text)
        .map(str::to_string)
}
