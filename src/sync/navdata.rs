use std::path::Path;
use tracing::info;

use super::relink::{relink, COMMERCIAL_HUB_AIRPORTS};
use super::replace::{replace_table, ReplaceResult};
use crate::error::Result;
use crate::schema::{SchemaProfile, AIRPORT};
use crate::store::{check_columns, column_list, quote_ident, Store};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavdataSync {
    pub airports: ReplaceResult,
    pub hubs_relinked: u64,
}

/// Copy the airport table of a navdatareader / Little Navmap database into
/// NeoFly and repoint commercial hubs at the new airport ids.
///
/// Both steps commit together. Unless `force` is set the sync refuses to
/// leave NeoFly with fewer airports than it had.
pub fn sync_navdata(
    navdata: &Path,
    neofly: &Path,
    profile: &SchemaProfile,
    force: bool,
) -> Result<NavdataSync> {
    let source = Store::open_read_only(navdata, "navdata")?;
    let mut target = Store::open_read_write(neofly, "NeoFly data")?;

    info!(path = %source.path().display(), "Reading airport info from source database.");
    check_columns(source.connection(), AIRPORT, &profile.airport_columns)?;
    let airports = source.fetch_all(
        &format!(
            "SELECT {} FROM {}",
            column_list(&profile.airport_columns),
            quote_ident(AIRPORT)
        ),
        [],
    )?;
    drop(source);

    let tx = target.transaction()?;
    let replaced = replace_table(&tx, AIRPORT, &profile.airport_columns, &airports.rows, force)?;

    info!("Updating commercialHubs with new airport IDs");
    let hubs_relinked = relink(&tx, &COMMERCIAL_HUB_AIRPORTS)?;

    tx.commit()?;
    info!("Done!");

    Ok(NavdataSync {
        airports: replaced,
        hubs_relinked,
    })
}
