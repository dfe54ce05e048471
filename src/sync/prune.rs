use rusqlite::Connection;
use std::path::Path;
use tracing::info;

use crate::error::Result;
use crate::schema::AIRPORT;
use crate::store::{count_rows, SqlValue, Store};

/// The airport fields a pruning rule can look at
#[derive(Debug, Clone, PartialEq)]
pub struct AirportSummary {
    pub rowid: i64,
    pub ident: Option<String>,
    pub num_runway_light: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PruneResult {
    pub airports_before: u64,
    pub airports_removed: u64,
    pub missions_removed: u64,
}

/// Keep fields with at least one lit runway. NeoFly keeps no runway surface
/// data, and lighting is a good stand-in for a paved strip. Airports whose
/// lighting is unknown are kept.
pub fn has_lit_runway(airport: &AirportSummary) -> bool {
    airport.num_runway_light != Some(0)
}

/// Delete airports failing `keep`, then every mission departing from or
/// arriving at an airport that no longer exists.
///
/// A mission with a NULL departure or arrival names no airport and is left in
/// place, so it can survive a prune without a matching airport row.
pub fn prune_airports<F>(conn: &Connection, keep: F) -> Result<PruneResult>
where
    F: Fn(&AirportSummary) -> bool,
{
    let airports_before = count_rows(conn, AIRPORT)?;

    let doomed: Vec<i64> = {
        let mut stmt = conn.prepare("SELECT rowid, ident, num_runway_light FROM airport")?;
        let airports = stmt
            .query_map([], |row| {
                Ok(AirportSummary {
                    rowid: row.get(0)?,
                    ident: row.get(1)?,
                    num_runway_light: SqlValue::from(row.get_ref(2)?).as_i64(),
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        airports
            .into_iter()
            .filter(|airport| !keep(airport))
            .map(|airport| airport.rowid)
            .collect()
    };

    let mut delete = conn.prepare_cached("DELETE FROM airport WHERE rowid = ?1")?;
    let mut airports_removed: u64 = 0;
    for rowid in &doomed {
        airports_removed += delete.execute([rowid])? as u64;
    }

    let missions_removed = conn.execute(
        "DELETE FROM missions
         WHERE departure NOT IN (SELECT ident FROM airport WHERE ident IS NOT NULL)
            OR arrival NOT IN (SELECT ident FROM airport WHERE ident IS NOT NULL)",
        [],
    )? as u64;

    info!(
        airports = airports_removed,
        missions = missions_removed,
        "Deleted {} of {} airports",
        airports_removed,
        airports_before
    );

    Ok(PruneResult {
        airports_before,
        airports_removed,
        missions_removed,
    })
}

/// Remove unlit (likely unpaved) airports and their missions from a NeoFly database
pub fn prune_unpaved(neofly: &Path) -> Result<PruneResult> {
    let mut store = Store::open_read_write(neofly, "NeoFly data")?;
    let tx = store.transaction()?;
    let result = prune_airports(&tx, has_lit_runway)?;
    tx.commit()?;
    info!("Done!");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE airport (
                airport_id INTEGER PRIMARY KEY, ident TEXT, num_runway_light INTEGER
             );
             CREATE TABLE missions (id INTEGER PRIMARY KEY, departure TEXT, arrival TEXT);
             INSERT INTO airport VALUES
                (1, 'KSEA', 2), (2, 'GRAS', 0), (3, 'KPDX', 1), (4, 'UNKN', NULL);
             INSERT INTO missions (departure, arrival) VALUES
                ('KSEA', 'KPDX'), ('KSEA', 'GRAS'), ('GRAS', 'KPDX'),
                ('KPDX', 'UNKN'), ('KSEA', 'GONE');",
        )
        .unwrap();
        conn
    }

    #[test]
    fn test_prune_cascades_to_missions() {
        let conn = setup();
        let result = prune_airports(&conn, has_lit_runway).unwrap();

        assert_eq!(
            result,
            PruneResult {
                airports_before: 4,
                airports_removed: 1,
                missions_removed: 3,
            }
        );

        let orphans: i64 = conn
            .query_row(
                "SELECT count(*) FROM missions m
                  WHERE NOT EXISTS (SELECT 1 FROM airport a WHERE a.ident = m.departure)
                    OR NOT EXISTS (SELECT 1 FROM airport a WHERE a.ident = m.arrival)",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(orphans, 0);
    }

    #[test]
    fn test_prune_is_idempotent() {
        let conn = setup();
        prune_airports(&conn, has_lit_runway).unwrap();
        let again = prune_airports(&conn, has_lit_runway).unwrap();
        assert_eq!(again.airports_removed, 0);
        assert_eq!(again.missions_removed, 0);
        assert_eq!(again.airports_before, 3);
    }

    #[test]
    fn test_mission_without_endpoint_is_kept() {
        let conn = setup();
        conn.execute("INSERT INTO missions (departure, arrival) VALUES ('GRAS', NULL)", [])
            .unwrap();

        let result = prune_airports(&conn, has_lit_runway).unwrap();
        assert_eq!(result.missions_removed, 3);

        let kept: i64 = conn
            .query_row("SELECT count(*) FROM missions WHERE arrival IS NULL", [], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(kept, 1);
    }

    #[test]
    fn test_empty_tables() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE airport (ident TEXT, num_runway_light INTEGER);
             CREATE TABLE missions (departure TEXT, arrival TEXT);",
        )
        .unwrap();
        assert_eq!(prune_airports(&conn, has_lit_runway).unwrap(), PruneResult::default());
    }
}
