//! Default locations of the databases and the schema profile in effect

use anyhow::{Context, Result};
use directories::BaseDirs;
use std::env;
use std::path::{Path, PathBuf};

use crate::schema::SchemaProfile;

const BUNDLED_AIRCRAFT_CSV: &str = "aircraftdata.csv";

/// NeoFly database: explicit path, else `%PROGRAMDATA%\NeoFly\common.db`
pub fn neofly_db_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => Ok(path),
        None => {
            let program_data = env::var_os("PROGRAMDATA")
                .context("Could not determine NeoFly location; pass --neofly or set NEOFLY_DB")?;
            Ok(PathBuf::from(program_data).join("NeoFly").join("common.db"))
        }
    }
}

/// Little Navmap MSFS database under the user's roaming data directory
pub fn navdata_db_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => Ok(path),
        None => {
            let dirs = BaseDirs::new()
                .context("Could not determine navdata location; pass --navdata or set NAVDATA_DB")?;
            Ok(dirs
                .data_dir()
                .join("ABarthel")
                .join("little_navmap_db")
                .join("little_navmap_msfs.sqlite"))
        }
    }
}

/// Aircraft CSV: explicit path, else the copy shipped next to the executable,
/// else one in the working directory.
pub fn aircraft_csv_path(custom: Option<PathBuf>) -> PathBuf {
    if let Some(path) = custom {
        return path;
    }

    let beside_exe = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(BUNDLED_AIRCRAFT_CSV)));

    match beside_exe {
        Some(path) if path.exists() => path,
        _ => PathBuf::from(BUNDLED_AIRCRAFT_CSV),
    }
}

/// Load a JSON schema profile, or the built-in NeoFly 1.4 layout
pub fn load_profile(path: Option<&Path>) -> Result<SchemaProfile> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read profile: {:?}", path))?;
            SchemaProfile::from_json(&text)
                .with_context(|| format!("Failed to parse profile: {:?}", path))
        }
        None => Ok(SchemaProfile::default()),
    }
}
