//! Throwaway NeoFly and navdata databases for integration tests

#![allow(dead_code)]

use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use neofly_tools::schema::AIRPORT_COLUMNS;
use neofly_tools::store::{insert_rows, SqlValue};

pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

pub fn open(path: &Path) -> Connection {
    Connection::open(path).expect("Failed to open test database")
}

pub fn airport_ddl() -> String {
    let columns: Vec<String> = AIRPORT_COLUMNS
        .iter()
        .map(|c| {
            if *c == "airport_id" {
                "airport_id INTEGER PRIMARY KEY".to_string()
            } else {
                c.to_string()
            }
        })
        .collect();
    format!("CREATE TABLE airport ({});", columns.join(", "))
}

pub fn ident(i: i64) -> String {
    format!("X{:05}", i)
}

/// One airport row with every column but the interesting few left NULL
pub fn airport_row(airport_id: i64, ident: &str, lit_runways: i64) -> Vec<SqlValue> {
    AIRPORT_COLUMNS
        .iter()
        .map(|column| match *column {
            "airport_id" => SqlValue::Integer(airport_id),
            "ident" | "icao" => SqlValue::from(ident),
            "name" => SqlValue::Text(format!("Airport {}", ident)),
            "num_runway_light" => SqlValue::Integer(lit_runways),
            "laty" => SqlValue::Real(47.5),
            _ => SqlValue::Null,
        })
        .collect()
}

/// Airports numbered 1..=count, with ids shifted by `id_offset`
pub fn insert_airports(conn: &mut Connection, count: i64, id_offset: i64) {
    let rows: Vec<Vec<SqlValue>> = (1..=count)
        .map(|i| airport_row(i + id_offset, &ident(i), i % 2))
        .collect();
    let tx = conn.transaction().unwrap();
    insert_rows(&tx, "airport", AIRPORT_COLUMNS, &rows).unwrap();
    tx.commit().unwrap();
}

/// A Little Navmap style database holding `count` airports
pub fn navdata_db(path: &Path, count: i64) {
    let mut conn = open(path);
    conn.execute_batch(&airport_ddl()).unwrap();
    insert_airports(&mut conn, count, 10_000);
}

/// A NeoFly 1.4 style database holding `airports` airports
pub fn neofly_db(path: &Path, airports: i64) {
    let mut conn = open(path);
    conn.execute_batch(&airport_ddl()).unwrap();
    conn.execute_batch(
        "CREATE TABLE commercialHubs (id INTEGER PRIMARY KEY, airport_id INTEGER, ident TEXT);
         CREATE TABLE missions (id INTEGER PRIMARY KEY, departure TEXT, arrival TEXT);
         CREATE TABLE career (id INTEGER PRIMARY KEY, name TEXT, pilotCurrentICAO TEXT, cash REAL);
         CREATE TABLE hangar (Aircraft TEXT, Type TEXT, Engines INTEGER, Qualification TEXT,
                              MaxPayloadlbs INTEGER, Pax INTEGER, Cost INTEGER, Rangenm INTEGER,
                              Location TEXT, statusEngine INTEGER, statusHull INTEGER,
                              airframe INTEGER, currentFuel INTEGER, owner INTEGER, status INTEGER,
                              id INTEGER PRIMARY KEY);
         CREATE TABLE log (id INTEGER PRIMARY KEY, image TEXT, mission TEXT);
         CREATE TABLE aircraftData (aircraft TEXT, pax INTEGER, rangenm INTEGER);
         INSERT INTO aircraftData VALUES
            ('XCub', 1, 695), ('Cessna 152', 1, 415), ('A320', 150, 3000), ('A320neo', 180, 3400);",
    )
    .unwrap();
    insert_airports(&mut conn, airports, 0);
}

pub fn count(path: &Path, table: &str) -> i64 {
    open(path)
        .query_row(&format!("SELECT count(*) FROM {}", table), [], |row| row.get(0))
        .unwrap()
}

pub fn column<T: rusqlite::types::FromSql>(path: &Path, sql: &str) -> Vec<T> {
    let conn = open(path);
    let mut stmt = conn.prepare(sql).unwrap();
    let values = stmt
        .query_map([], |row| row.get(0))
        .unwrap()
        .collect::<rusqlite::Result<Vec<T>>>()
        .unwrap();
    values
}
