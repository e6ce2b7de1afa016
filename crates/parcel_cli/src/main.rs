//! Tracker demo entry point.
//!
//! # Responsibility
//! - Run the register / update / advance / delete flow against a database file.
//! - Resolve configuration from argv and `PARCEL_*` environment variables.

use log::error;
use parcel_core::db::open_db;
use parcel_core::{
    default_log_level, describe, init_logging, ClientId, ParcelService, SqliteParcelRepository,
};
use std::error::Error;
use std::process::ExitCode;

const DEFAULT_DB_PATH: &str = "tracker.db";
const DEMO_CLIENT: ClientId = 1;

struct CliConfig {
    db_path: String,
    log_level: String,
    log_dir: Option<String>,
}

impl CliConfig {
    fn from_env() -> Self {
        let db_path = std::env::args()
            .nth(1)
            .or_else(|| std::env::var("PARCEL_DB_PATH").ok())
            .unwrap_or_else(|| DEFAULT_DB_PATH.to_string());
        let log_level = std::env::var("PARCEL_LOG_LEVEL")
            .unwrap_or_else(|_| default_log_level().to_string());
        let log_dir = std::env::var("PARCEL_LOG_DIR").ok();
        Self {
            db_path,
            log_level,
            log_dir,
        }
    }
}

fn main() -> ExitCode {
    let config = CliConfig::from_env();

    if let Some(log_dir) = config.log_dir.as_deref() {
        if let Err(err) = init_logging(&config.log_level, log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=cli_run module=cli status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &CliConfig) -> Result<(), Box<dyn Error>> {
    let conn = open_db(&config.db_path)?;
    let service = ParcelService::new(SqliteParcelRepository::try_new(&conn)?);

    let parcel = service.register(DEMO_CLIENT, "Pskov, Sovetskaya 1")?;
    println!("registered {}", describe(&parcel));
    print_client_parcels(&service, DEMO_CLIENT)?;

    service.change_address(parcel.number, "Saratov, Lenina 12")?;
    let status = service.next_status(parcel.number)?;
    println!("parcel #{} moved to {status}", parcel.number);
    print_client_parcels(&service, DEMO_CLIENT)?;

    let spare = service.register(DEMO_CLIENT, "Kazan, Baumana 5")?;
    service.delete(spare.number)?;
    println!("deleted parcel #{}", spare.number);
    print_client_parcels(&service, DEMO_CLIENT)?;

    Ok(())
}

fn print_client_parcels(
    service: &ParcelService<SqliteParcelRepository<'_>>,
    client: ClientId,
) -> Result<(), Box<dyn Error>> {
    println!("parcels of client {client}:");
    for parcel in service.client_parcels(client)? {
        println!("  {}", describe(&parcel));
    }
    Ok(())
}
