use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::career::Starter;

#[derive(Parser, Debug)]
#[command(name = "neofly-tools")]
#[command(version, about = "Sync airport data and careers into a NeoFly database")]
pub struct Cli {
    /// JSON schema profile replacing the built-in NeoFly 1.4 layout
    #[arg(long, global = true)]
    pub profile: Option<PathBuf>,

    /// Log debug detail (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replace NeoFly airports with those of a navdatareader / Little Navmap database
    SyncNavdata {
        /// NeoFly database (default: %PROGRAMDATA%\NeoFly\common.db)
        #[arg(long, env = "NEOFLY_DB")]
        neofly: Option<PathBuf>,

        /// Navdata database (default: Little Navmap's MSFS database)
        #[arg(long, env = "NAVDATA_DB")]
        navdata: Option<PathBuf>,

        /// Update even if the new table has fewer airports
        #[arg(short, long)]
        force: bool,
    },

    /// Remove airports without a lit runway, and their missions
    PruneUnpaved {
        /// NeoFly database
        #[arg(long, env = "NEOFLY_DB")]
        neofly: Option<PathBuf>,
    },

    /// Import a NeoFly 1.3 career into a NeoFly 1.4 database
    MigrateCareer {
        /// Old NeoFly database
        #[arg(long)]
        source: PathBuf,

        /// New NeoFly database
        #[arg(long, env = "NEOFLY_DB")]
        target: Option<PathBuf>,
    },

    /// Replace the aircraft catalog with the contents of a CSV file
    LoadAircraft {
        /// NeoFly database
        #[arg(long, env = "NEOFLY_DB")]
        neofly: Option<PathBuf>,

        /// CSV with a header naming aircraftData columns (default: bundled aircraftdata.csv)
        #[arg(long)]
        source: Option<PathBuf>,

        /// Replace even if the catalog would get smaller
        #[arg(short, long)]
        force: bool,
    },

    /// Move a career's pilot to a random airport holding one of its idle aircraft
    Relocate {
        /// NeoFly database
        #[arg(long, env = "NEOFLY_DB")]
        neofly: Option<PathBuf>,

        /// Career name
        #[arg(long)]
        career: String,
    },

    /// Give a career one starter aircraft in every ICAO region
    GlobalSandbox {
        /// NeoFly database
        #[arg(long, env = "NEOFLY_DB")]
        neofly: Option<PathBuf>,

        /// Career name
        #[arg(long)]
        career: String,

        /// Starting fleet
        #[arg(long, value_enum, default_value_t)]
        starter: Starter,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_sync_navdata() {
        let cli = Cli::try_parse_from([
            "neofly-tools",
            "sync-navdata",
            "--neofly",
            "common.db",
            "--navdata",
            "lnm.sqlite",
            "--force",
        ])
        .unwrap();

        match cli.command {
            Commands::SyncNavdata { neofly, navdata, force } => {
                assert_eq!(neofly, Some(PathBuf::from("common.db")));
                assert_eq!(navdata, Some(PathBuf::from("lnm.sqlite")));
                assert!(force);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_sandbox_starter() {
        let cli = Cli::try_parse_from([
            "neofly-tools",
            "global-sandbox",
            "--neofly",
            "common.db",
            "--career",
            "Bush Co",
            "--starter",
            "mix-ap",
        ])
        .unwrap();

        match cli.command {
            Commands::GlobalSandbox { career, starter, .. } => {
                assert_eq!(career, "Bush Co");
                assert_eq!(starter, Starter::MixAp);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_relocate_requires_career() {
        let args = ["neofly-tools", "relocate", "--neofly", "common.db"];
        assert!(Cli::try_parse_from(args).is_err());
    }
}
