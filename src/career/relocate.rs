use rand::seq::SliceRandom;
use rand::Rng;
use rusqlite::{params, Connection};
use std::path::Path;
use tracing::info;

use crate::error::{Result, SyncError};
use crate::schema::SchemaProfile;
use crate::store::Store;

/// Distinct airports where the career has an aircraft sitting idle
pub fn eligible_locations(
    conn: &Connection,
    career: &str,
    idle_status: i64,
) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT DISTINCT hangar.Location
         FROM hangar JOIN career ON hangar.owner = career.id
         WHERE career.name = ?1 AND hangar.status = ?2 AND hangar.Location IS NOT NULL
         ORDER BY hangar.Location",
    )?;
    let locations = stmt
        .query_map(params![career, idle_status], |row| row.get(0))?
        .collect::<rusqlite::Result<Vec<String>>>()?;
    Ok(locations)
}

/// Move the career's pilot to a random airport holding one of its idle aircraft.
///
/// The eligible set is read and the new location written in separate
/// statements with no transaction around them. Another writer changing the
/// hangar in between is not guarded against.
pub fn choose_relocation<R: Rng + ?Sized>(
    conn: &Connection,
    career: &str,
    idle_status: i64,
    rng: &mut R,
) -> Result<String> {
    let locations = eligible_locations(conn, career, idle_status)?;
    info!(career, "Eligible locations: {:?}", locations);

    let chosen = locations
        .choose(rng)
        .cloned()
        .ok_or_else(|| SyncError::NoEligibleLocation {
            career: career.to_string(),
        })?;
    info!(career, "Chosen location: {}", chosen);

    conn.execute(
        "UPDATE career SET pilotCurrentICAO = ?1 WHERE name = ?2",
        params![chosen, career],
    )?;

    Ok(chosen)
}

pub fn relocate<R: Rng + ?Sized>(
    neofly: &Path,
    career: &str,
    profile: &SchemaProfile,
    rng: &mut R,
) -> Result<String> {
    let store = Store::open_read_write(neofly, "NeoFly data")?;
    let chosen = choose_relocation(store.connection(), career, profile.idle_status, rng)?;
    info!("Done!");
    Ok(chosen)
}
