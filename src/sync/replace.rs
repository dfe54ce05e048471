use rusqlite::Connection;
use tracing::info;

use crate::error::{Result, SyncError};
use crate::store::{check_row_width, count_rows, insert_rows, quote_ident, SqlValue};

/// Row counts before and after a table replacement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplaceResult {
    pub old_count: u64,
    pub new_count: u64,
}

/// Replace every row of `table` with `rows`, inserted under `columns`.
///
/// Refuses to leave the table with fewer rows than it has now unless
/// `allow_shrink` is set; equal counts are accepted. Rows must all be as wide
/// as `columns`. Both checks happen before anything is deleted. Run this on a
/// transaction so a failure part way through the insert rolls the delete back
/// too.
pub fn replace_table<S: AsRef<str>>(
    conn: &Connection,
    table: &str,
    columns: &[S],
    rows: &[Vec<SqlValue>],
    allow_shrink: bool,
) -> Result<ReplaceResult> {
    let old_count = count_rows(conn, table)?;
    let incoming = rows.len() as u64;

    info!(
        table,
        old = old_count,
        new = incoming,
        "Replacing {} {} rows with {}",
        old_count,
        table,
        incoming
    );

    if incoming < old_count && !allow_shrink {
        return Err(SyncError::WouldShrink {
            table: table.to_string(),
            existing: old_count,
            incoming,
        });
    }

    check_row_width(table, columns.len(), rows)?;

    conn.execute(&format!("DELETE FROM {}", quote_ident(table)), [])?;
    let new_count = insert_rows(conn, table, columns, rows)?;

    Ok(ReplaceResult {
        old_count,
        new_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(rows: i64) -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE t (id INTEGER PRIMARY KEY, name TEXT)").unwrap();
        for i in 0..rows {
            conn.execute("INSERT INTO t (name) VALUES (?1)", [format!("old{}", i)])
                .unwrap();
        }
        conn
    }

    fn rows(n: i64) -> Vec<Vec<SqlValue>> {
        (0..n)
            .map(|i| vec![SqlValue::Integer(i + 100), SqlValue::Text(format!("new{}", i))])
            .collect()
    }

    #[test]
    fn test_equal_count_is_allowed() {
        let conn = setup(3);
        let result = replace_table(&conn, "t", &["id", "name"], &rows(3), false).unwrap();
        assert_eq!(result, ReplaceResult { old_count: 3, new_count: 3 });

        let names: Vec<String> = conn
            .prepare("SELECT name FROM t ORDER BY id")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<rusqlite::Result<_>>()
            .unwrap();
        assert_eq!(names, vec!["new0", "new1", "new2"]);
    }

    #[test]
    fn test_shrink_refused_without_override() {
        let conn = setup(3);
        let err = replace_table(&conn, "t", &["id", "name"], &rows(2), false).unwrap_err();
        assert!(matches!(err, SyncError::WouldShrink { existing: 3, incoming: 2, .. }));
        assert_eq!(count_rows(&conn, "t").unwrap(), 3);
    }

    #[test]
    fn test_shrink_with_override() {
        let conn = setup(3);
        let result = replace_table(&conn, "t", &["id", "name"], &[], true).unwrap();
        assert_eq!(result, ReplaceResult { old_count: 3, new_count: 0 });
        assert_eq!(count_rows(&conn, "t").unwrap(), 0);
    }

    #[test]
    fn test_short_row_refused_before_delete() {
        let conn = setup(2);
        let rows = vec![
            vec![SqlValue::Integer(1), SqlValue::from("first")],
            vec![SqlValue::Integer(2)],
        ];

        let err = replace_table(&conn, "t", &["id", "name"], &rows, true).unwrap_err();
        assert!(matches!(err, SyncError::RowWidth { expected: 2, got: 1, .. }));

        let names: Vec<String> = conn
            .prepare("SELECT name FROM t ORDER BY id")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<rusqlite::Result<_>>()
            .unwrap();
        assert_eq!(names, vec!["old0", "old1"]);
    }

    #[test]
    fn test_failed_insert_rolls_back_with_transaction() {
        let mut conn = setup(2);
        let mut bad = rows(3);
        // duplicate primary key on the last row
        bad[2][0] = SqlValue::Integer(100);

        {
            let tx = conn.transaction().unwrap();
            assert!(replace_table(&tx, "t", &["id", "name"], &bad, false).is_err());
        }

        assert_eq!(count_rows(&conn, "t").unwrap(), 2);
    }
}
