//! Query primitives over a SQLite database file

mod value;

pub use value::SqlValue;

use rusqlite::config::DbConfig;
use rusqlite::{Connection, OpenFlags, Params, Transaction};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Result, SyncError};
use crate::schema::ColumnRef;

/// Rows read from a store together with the column names they were read under
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowSet {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<SqlValue>>,
}

impl RowSet {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column, failing with the table name for context
    pub fn column_index(&self, table: &str, column: &ColumnRef) -> Result<usize> {
        column
            .resolve(&self.columns)
            .ok_or_else(|| SyncError::UnknownColumn {
                table: table.to_string(),
                column: column.to_string(),
            })
    }
}

/// An open database file
pub struct Store {
    conn: Connection,
    path: PathBuf,
}

impl Store {
    /// Open an existing database that this tool only reads
    pub fn open_read_only(path: &Path, what: &'static str) -> Result<Self> {
        Self::open(path, what, OpenFlags::SQLITE_OPEN_READ_ONLY)
    }

    /// Open an existing database for writing. Never creates a new file.
    pub fn open_read_write(path: &Path, what: &'static str) -> Result<Self> {
        Self::open(path, what, OpenFlags::SQLITE_OPEN_READ_WRITE)
    }

    fn open(path: &Path, what: &'static str, flags: OpenFlags) -> Result<Self> {
        if !path.is_file() {
            return Err(SyncError::PathNotFound {
                what,
                path: path.to_path_buf(),
            });
        }

        debug!(path = %path.display(), what, "opening store");
        let conn = Connection::open_with_flags(
            path,
            flags | OpenFlags::SQLITE_OPEN_URI | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        // a quoted name that matches no column must be an error, not a string
        conn.set_db_config(DbConfig::SQLITE_DBCONFIG_DQS_DML, false)?;
        conn.set_db_config(DbConfig::SQLITE_DBCONFIG_DQS_DDL, false)?;

        Ok(Self {
            conn,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Begin the transaction all writes of one invocation share. Dropping it
    /// without `commit` rolls everything back.
    pub fn transaction(&mut self) -> Result<Transaction<'_>> {
        Ok(self.conn.transaction()?)
    }

    pub fn fetch_all<P: Params>(&self, sql: &str, params: P) -> Result<RowSet> {
        fetch_all(&self.conn, sql, params)
    }
}

/// Quote an identifier for interpolation into SQL
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Comma-separated list of quoted identifiers
pub fn column_list<S: AsRef<str>>(columns: &[S]) -> String {
    columns
        .iter()
        .map(|c| quote_ident(c.as_ref()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Run a query and collect every row
pub fn fetch_all<P: Params>(conn: &Connection, sql: &str, params: P) -> Result<RowSet> {
    let mut stmt = conn.prepare(sql)?;
    let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
    let width = columns.len();

    let rows = stmt
        .query_map(params, |row| {
            (0..width)
                .map(|idx| row.get_ref(idx).map(SqlValue::from))
                .collect::<rusqlite::Result<Vec<_>>>()
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(RowSet { columns, rows })
}

pub fn count_rows(conn: &Connection, table: &str) -> Result<u64> {
    let sql = format!("SELECT count(*) FROM {}", quote_ident(table));
    let count: i64 = conn.query_row(&sql, [], |row| row.get(0))?;
    Ok(count as u64)
}

/// Column names of a table as the store declares them
pub fn table_columns(conn: &Connection, table: &str) -> Result<Vec<String>> {
    let sql = format!("PRAGMA table_info({})", quote_ident(table));
    let mut stmt = conn.prepare(&sql)?;
    let columns = stmt
        .query_map([], |row| row.get::<_, String>("name"))?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(columns)
}

/// Every listed column must exist in `table` under the same name
pub fn check_columns<S: AsRef<str>>(
    conn: &Connection,
    table: &str,
    columns: &[S],
) -> Result<()> {
    let known = table_columns(conn, table)?;
    match columns.iter().find(|c| !known.iter().any(|k| k == c.as_ref())) {
        Some(column) => Err(SyncError::UnknownColumn {
            table: table.to_string(),
            column: column.as_ref().to_string(),
        }),
        None => Ok(()),
    }
}

/// Every row must carry one value per column
pub fn check_row_width(table: &str, width: usize, rows: &[Vec<SqlValue>]) -> Result<()> {
    match rows.iter().find(|row| row.len() != width) {
        Some(row) => Err(SyncError::RowWidth {
            table: table.to_string(),
            expected: width,
            got: row.len(),
        }),
        None => Ok(()),
    }
}

/// Insert rows under the given columns, one cached statement execution per row
pub fn insert_rows<S: AsRef<str>>(
    conn: &Connection,
    table: &str,
    columns: &[S],
    rows: &[Vec<SqlValue>],
) -> Result<u64> {
    if rows.is_empty() {
        return Ok(0);
    }
    check_row_width(table, columns.len(), rows)?;

    let placeholders: Vec<&str> = columns.iter().map(|_| "?").collect();
    let insert_sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        quote_ident(table),
        column_list(columns),
        placeholders.join(", ")
    );

    let mut stmt = conn.prepare_cached(&insert_sql)?;
    let mut count: u64 = 0;

    for row in rows {
        for (idx, value) in row.iter().enumerate() {
            value.bind_to(idx + 1, &mut stmt)?;
        }
        stmt.raw_execute()?;
        count += 1;
    }

    Ok(count)
}
