use clap::ValueEnum;
use rand::seq::SliceRandom;
use rand::Rng;
use rusqlite::{Connection, OptionalExtension};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::error::{Result, SyncError};
use crate::schema::{SchemaProfile, HANGAR};
use crate::store::{insert_rows, SqlValue, Store};

/// Starting fleet placed by the global sandbox
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Starter {
    #[default]
    Xcub,
    C152,
    C172,
    /// XCub or Cessna Skyhawk, picked per region
    MixAp,
    /// Any of the three, picked per region
    Mix,
}

/// Hangar fields of a brand-new starter aircraft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarterAircraft {
    pub aircraft: &'static str,
    pub kind: &'static str,
    pub engines: i64,
    pub qualification: &'static str,
    pub max_payload_lbs: i64,
    pub pax: i64,
    pub range_nm: i64,
}

pub const XCUB: StarterAircraft = StarterAircraft {
    aircraft: "XCub",
    kind: "prop",
    engines: 1,
    qualification: "A",
    max_payload_lbs: 1084,
    pax: 1,
    range_nm: 695,
};

pub const CESSNA_152: StarterAircraft = StarterAircraft {
    aircraft: "Cessna 152",
    kind: "prop",
    engines: 1,
    qualification: "A",
    max_payload_lbs: 589,
    pax: 1,
    range_nm: 415,
};

pub const CESSNA_172_G1000: StarterAircraft = StarterAircraft {
    aircraft: "Cessna Skyhawk G1000",
    kind: "prop",
    engines: 1,
    qualification: "A",
    max_payload_lbs: 867,
    pax: 3,
    range_nm: 640,
};

const HANGAR_COLUMNS: &[&str] = &[
    "Aircraft",
    "Type",
    "Engines",
    "Qualification",
    "MaxPayloadlbs",
    "Pax",
    "Cost",
    "Rangenm",
    "Location",
    "statusEngine",
    "statusHull",
    "airframe",
    "currentFuel",
    "owner",
    "status",
];

impl Starter {
    pub fn pick<R: Rng + ?Sized>(self, rng: &mut R) -> StarterAircraft {
        let choices: &[StarterAircraft] = match self {
            Starter::Xcub => &[XCUB],
            Starter::C152 => &[CESSNA_152],
            Starter::C172 => &[CESSNA_172_G1000],
            Starter::MixAp => &[XCUB, CESSNA_172_G1000],
            Starter::Mix => &[CESSNA_152, XCUB, CESSNA_172_G1000],
        };
        *choices.choose(rng).unwrap_or(&XCUB)
    }
}

impl StarterAircraft {
    fn hangar_row(&self, location: &str, owner: i64, status: i64) -> Vec<SqlValue> {
        vec![
            self.aircraft.into(),
            self.kind.into(),
            self.engines.into(),
            self.qualification.into(),
            self.max_payload_lbs.into(),
            self.pax.into(),
            SqlValue::Integer(0),
            self.range_nm.into(),
            location.into(),
            SqlValue::Integer(100),
            SqlValue::Integer(100),
            SqlValue::Integer(0),
            SqlValue::Integer(0),
            owner.into(),
            status.into(),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SandboxResult {
    /// (region, airport ident, aircraft name)
    pub placed: Vec<(char, String, &'static str)>,
    pub skipped: Vec<char>,
}

/// Place one starter aircraft at a random airport of every region
pub fn seed_sandbox<R: Rng + ?Sized>(
    conn: &Connection,
    career: &str,
    starter: Starter,
    profile: &SchemaProfile,
    rng: &mut R,
) -> Result<SandboxResult> {
    let owner: i64 = conn
        .query_row("SELECT id FROM career WHERE name = ?1", [career], |row| row.get(0))
        .optional()?
        .ok_or_else(|| SyncError::UnknownCareer {
            career: career.to_string(),
        })?;

    let mut stmt = conn.prepare_cached(
        "SELECT ident FROM airport WHERE ident LIKE ?1 AND ident IS NOT NULL ORDER BY ident",
    )?;
    let mut result = SandboxResult::default();

    for &region in &profile.sandbox_regions {
        let pattern = format!("{}___%", region);
        let airports = stmt
            .query_map([&pattern], |row| row.get::<_, String>(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        let Some(airport) = airports.choose(rng) else {
            warn!(%region, "No airports in region, skipping");
            result.skipped.push(region);
            continue;
        };

        let aircraft = starter.pick(rng);
        debug!(%region, %airport, aircraft = aircraft.aircraft, "placing starter");
        insert_rows(
            conn,
            HANGAR,
            HANGAR_COLUMNS,
            &[aircraft.hangar_row(airport, owner, profile.idle_status)],
        )?;
        result.placed.push((region, airport.clone(), aircraft.aircraft));
    }

    info!(
        career,
        placed = result.placed.len(),
        skipped = result.skipped.len(),
        "Placed starter aircraft"
    );
    Ok(result)
}

/// Give a career one starter aircraft in every ICAO region
pub fn global_sandbox<R: Rng + ?Sized>(
    neofly: &Path,
    career: &str,
    starter: Starter,
    profile: &SchemaProfile,
    rng: &mut R,
) -> Result<SandboxResult> {
    let mut store = Store::open_read_write(neofly, "NeoFly data")?;
    let tx = store.transaction()?;
    let result = seed_sandbox(&tx, career, starter, profile, rng)?;
    tx.commit()?;
    info!("Done.");
    Ok(result)
}
