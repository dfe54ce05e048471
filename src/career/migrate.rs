use rusqlite::Connection;
use std::path::Path;
use tracing::{debug, info};

use super::matching::{AircraftMatcher, IconClassifier};
use crate::error::Result;
use crate::schema::{SchemaProfile, AIRCRAFT_DATA, CAREER, HANGAR, LOG};
use crate::store::{fetch_all, quote_ident, RowSet, SqlValue, Store};
use crate::sync::{replace_table, ReplaceResult};

/// The tables that make up one career save
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CareerTables {
    pub career: RowSet,
    pub hangar: RowSet,
    pub log: RowSet,
}

impl CareerTables {
    /// Read every column of the career, hangar and log tables
    pub fn read(conn: &Connection) -> Result<Self> {
        Ok(Self {
            career: read_table(conn, CAREER)?,
            hangar: read_table(conn, HANGAR)?,
            log: read_table(conn, LOG)?,
        })
    }
}

fn read_table(conn: &Connection, table: &str) -> Result<RowSet> {
    let rows = fetch_all(
        conn,
        &format!("SELECT * FROM {} ORDER BY rowid", quote_ident(table)),
        [],
    )?;
    debug!(table, rows = rows.len(), "read legacy table");
    Ok(rows)
}

/// Aircraft names of the target catalog in catalog order
pub fn catalog_names(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT aircraft FROM {} ORDER BY rowid",
        quote_ident(AIRCRAFT_DATA)
    ))?;
    let names = stmt
        .query_map([], |row| row.get_ref(0).map(SqlValue::from))?
        .filter_map(|value| match value {
            Ok(SqlValue::Text(name)) => Some(Ok(name)),
            Ok(_) => None,
            Err(e) => Some(Err(e)),
        })
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(names)
}

/// Rewrite a legacy career into the current layout: hangar aircraft become
/// catalog names and log icons become category codes.
///
/// Any hangar entry that matches no catalog name fails the whole conversion.
pub fn convert_legacy(
    mut legacy: CareerTables,
    matcher: &AircraftMatcher,
    icons: &IconClassifier,
    profile: &SchemaProfile,
) -> Result<CareerTables> {
    let aircraft_idx = legacy
        .hangar
        .column_index(HANGAR, &profile.hangar_aircraft_column)?;
    for row in &mut legacy.hangar.rows {
        let description = row[aircraft_idx].as_str().unwrap_or_default();
        let name = matcher.resolve(description)?;
        debug!(from = description, to = name, "matched aircraft");
        row[aircraft_idx] = SqlValue::from(name);
    }

    let icon_idx = legacy.log.column_index(LOG, &profile.log_icon_column)?;
    for row in &mut legacy.log.rows {
        let category = icons.classify(row[icon_idx].as_str().unwrap_or_default());
        row[icon_idx] = category.into();
    }

    Ok(legacy)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MigrationResult {
    pub career: ReplaceResult,
    pub log: ReplaceResult,
    pub hangar: ReplaceResult,
}

/// Import a NeoFly 1.3 career into a NeoFly 1.4 database.
///
/// All three tables are converted before anything is written and then
/// replaced in one transaction. The legacy save is authoritative, so the
/// target tables may shrink.
pub fn migrate_career(
    source: &Path,
    target: &Path,
    profile: &SchemaProfile,
) -> Result<MigrationResult> {
    let source = Store::open_read_only(source, "source data")?;
    let mut target = Store::open_read_write(target, "target data")?;

    info!("Loading old career.");
    let legacy = CareerTables::read(source.connection())?;
    drop(source);

    info!("Loading new aircraft data.");
    let matcher = AircraftMatcher::new(catalog_names(target.connection())?);
    let icons = IconClassifier::new(&profile.icon_codes);
    let converted = convert_legacy(legacy, &matcher, &icons, profile)?;

    let tx = target.transaction()?;
    info!("Replacing career data.");
    let career = replace_rowset(&tx, CAREER, &converted.career)?;
    info!("Replacing log data.");
    let log = replace_rowset(&tx, LOG, &converted.log)?;
    info!("Replacing hangar data.");
    let hangar = replace_rowset(&tx, HANGAR, &converted.hangar)?;
    tx.commit()?;
    info!("Done.");

    Ok(MigrationResult { career, log, hangar })
}

fn replace_rowset(conn: &Connection, table: &str, rows: &RowSet) -> Result<ReplaceResult> {
    replace_table(conn, table, &rows.columns, &rows.rows, true)
}
