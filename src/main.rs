use anyhow::{Context, Result};
use neofly_tools::{
    career::{global_sandbox, migrate_career, relocate},
    catalog::load_aircraft,
    cli::{Cli, Commands},
    config,
    sync::{prune_unpaved, sync_navdata},
};
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    let profile = config::load_profile(cli.profile.as_deref())?;
    let start = Instant::now();

    match cli.command {
        Commands::SyncNavdata {
            neofly,
            navdata,
            force,
        } => {
            let neofly = config::neofly_db_path(neofly)?;
            let navdata = config::navdata_db_path(navdata)?;
            info!("Using {:?} for navdata.", navdata);
            info!("Using {:?} for NeoFly.", neofly);

            let result = sync_navdata(&navdata, &neofly, &profile, force)
                .context("Navdata sync failed")?;
            info!(
                "Replaced {} airports with {} and relinked {} commercial hubs",
                result.airports.old_count, result.airports.new_count, result.hubs_relinked
            );
        }

        Commands::PruneUnpaved { neofly } => {
            let neofly = config::neofly_db_path(neofly)?;
            let result = prune_unpaved(&neofly).context("Pruning airports failed")?;
            info!(
                "Removed {} airports and {} missions",
                result.airports_removed, result.missions_removed
            );
        }

        Commands::MigrateCareer { source, target } => {
            let target = config::neofly_db_path(target)?;
            let result =
                migrate_career(&source, &target, &profile).context("Career import failed")?;
            info!(
                "Imported {} career, {} hangar and {} log rows",
                result.career.new_count, result.hangar.new_count, result.log.new_count
            );
        }

        Commands::LoadAircraft {
            neofly,
            source,
            force,
        } => {
            let neofly = config::neofly_db_path(neofly)?;
            let source = config::aircraft_csv_path(source);
            let result =
                load_aircraft(&neofly, &source, force).context("Loading aircraft data failed")?;
            info!(
                "Replaced {} aircraft with {}",
                result.old_count, result.new_count
            );
        }

        Commands::Relocate { neofly, career } => {
            let neofly = config::neofly_db_path(neofly)?;
            let chosen = relocate(&neofly, &career, &profile, &mut rand::thread_rng())
                .with_context(|| format!("Relocating career '{}' failed", career))?;
            info!("{} is now based at {}", career, chosen);
        }

        Commands::GlobalSandbox {
            neofly,
            career,
            starter,
        } => {
            let neofly = config::neofly_db_path(neofly)?;
            let mut rng = rand::thread_rng();
            let result = global_sandbox(&neofly, &career, starter, &profile, &mut rng)
                .with_context(|| format!("Seeding sandbox for career '{}' failed", career))?;
            for (region, airport, aircraft) in &result.placed {
                info!("{}: {} at {}", region, aircraft, airport);
            }
        }
    }

    info!("Finished in {:.1}s", start.elapsed().as_secs_f64());
    Ok(())
}
