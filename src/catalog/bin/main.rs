include!("../../lib.rs");

use std::path::PathBuf;
use std::process::ExitCode;
use clap::Parser;
use crate::catalog::controller::ConsoleController;
use crate::catalog::factory;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::utils::log::setup_tracing;

/// Single-user book catalog over a local JSON data file
#[derive(Parser, Debug)]
#[command(name = "catalog")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the JSON data file
    #[arg(long, default_value = "library.json")]
    data_file: PathBuf,
}

fn main() -> ExitCode {
    setup_tracing();

    let args = Args::parse();
    let config = Configuration::new(args.data_file.as_path());

    // a data file that exists but cannot be parsed is fatal here; starting
    // anyway would overwrite it on the first save
    let catalog_svc = match factory::create_catalog_service(&config, RepositoryStore::JsonFile) {
        Ok(catalog_svc) => catalog_svc,
        Err(err) => {
            tracing::error!("cannot open catalog at {}: {}", config.data_file.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut controller = ConsoleController::new(catalog_svc);
    if let Err(err) = controller.run(&mut stdin.lock(), &mut stdout.lock()) {
        tracing::error!("console session failed: {}", err);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
