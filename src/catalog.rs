//! Aircraft catalog replacement from a CSV export

use std::path::Path;
use tracing::info;

use crate::error::{Result, SyncError};
use crate::schema::AIRCRAFT_DATA;
use crate::store::{check_columns, RowSet, SqlValue, Store};
use crate::sync::{replace_table, ReplaceResult};

/// Read a CSV whose header row names catalog columns. Fields are kept as text.
pub fn read_catalog_csv(path: &Path) -> Result<RowSet> {
    if !path.is_file() {
        return Err(SyncError::PathNotFound {
            what: "aircraft CSV",
            path: path.to_path_buf(),
        });
    }

    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_path(path)?;
    let header = reader.headers()?.clone();
    if header.is_empty() {
        return Err(SyncError::EmptySource {
            what: format!("Aircraft CSV {}", path.display()),
        });
    }

    let mut rows = RowSet::new(header.iter().map(|h| h.trim().to_string()).collect());
    for record in reader.records() {
        let record = record?;
        rows.rows.push(record.iter().map(SqlValue::from).collect());
    }

    Ok(rows)
}

/// Replace NeoFly's aircraft catalog with the contents of a CSV file
pub fn load_aircraft(neofly: &Path, source: &Path, force: bool) -> Result<ReplaceResult> {
    let mut store = Store::open_read_write(neofly, "NeoFly data")?;

    info!(path = %source.display(), "Loading aircraft data.");
    let catalog = read_catalog_csv(source)?;
    check_columns(store.connection(), AIRCRAFT_DATA, &catalog.columns)?;

    info!("Replacing aircraft data.");
    let tx = store.transaction()?;
    let result = replace_table(&tx, AIRCRAFT_DATA, &catalog.columns, &catalog.rows, force)?;
    tx.commit()?;
    info!("Done.");

    Ok(result)
}
