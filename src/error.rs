use std::path::PathBuf;
use thiserror::Error;

/// Everything that can abort a single tool invocation.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Unable to find {what} at '{}'", .path.display())]
    PathNotFound { what: &'static str, path: PathBuf },

    #[error(
        "Replacing {table} would reduce its row count from {existing} to {incoming}. \
         Run again with --force if this is wanted."
    )]
    WouldShrink {
        table: String,
        existing: u64,
        incoming: u64,
    },

    #[error("No known aircraft matches '{description}'")]
    NoMatch { description: String },

    #[error("Career '{career}' has no idle aircraft at any airport")]
    NoEligibleLocation { career: String },

    #[error("No career named '{career}'")]
    UnknownCareer { career: String },

    #[error("Table {table} has no column named '{column}'")]
    UnknownColumn { table: String, column: String },

    #[error("Row for {table} has {got} values, expected {expected}")]
    RowWidth {
        table: String,
        expected: usize,
        got: usize,
    },

    #[error("{what} is empty")]
    EmptySource { what: String },

    #[error("Database error: {0}")]
    Store(#[from] rusqlite::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid schema profile: {0}")]
    Profile(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SyncError>;
