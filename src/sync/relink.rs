use rusqlite::Connection;
use tracing::debug;

use crate::schema::{AIRPORT, COMMERCIAL_HUBS};
use crate::store::quote_ident;

/// A foreign key held by `dependent_table` that is re-derived from a natural key
#[derive(Debug, Clone, Copy)]
pub struct Relink<'a> {
    pub dependent_table: &'a str,
    pub fk_column: &'a str,
    pub natural_key_column: &'a str,
    pub referenced_table: &'a str,
    pub referenced_key_column: &'a str,
    pub referenced_natural_key_column: &'a str,
}

/// Commercial hubs point at airports by surrogate id and by ident
pub const COMMERCIAL_HUB_AIRPORTS: Relink<'static> = Relink {
    dependent_table: COMMERCIAL_HUBS,
    fk_column: "airport_id",
    natural_key_column: "ident",
    referenced_table: AIRPORT,
    referenced_key_column: "airport_id",
    referenced_natural_key_column: "ident",
};

impl Relink<'_> {
    fn update_sql(&self) -> String {
        format!(
            "UPDATE {dep} SET {fk} = (SELECT r.{rk} FROM {rt} AS r WHERE r.{rnk} = {dep}.{nk})",
            dep = quote_ident(self.dependent_table),
            fk = quote_ident(self.fk_column),
            nk = quote_ident(self.natural_key_column),
            rt = quote_ident(self.referenced_table),
            rk = quote_ident(self.referenced_key_column),
            rnk = quote_ident(self.referenced_natural_key_column),
        )
    }
}

/// Point every dependent row at the referenced row sharing its natural key.
/// Rows without a match get NULL. Returns the number of dependent rows touched.
pub fn relink(conn: &Connection, link: &Relink<'_>) -> crate::error::Result<u64> {
    let sql = link.update_sql();
    debug!(%sql, "relinking");
    let updated = conn.execute(&sql, [])?;
    Ok(updated as u64)
}
