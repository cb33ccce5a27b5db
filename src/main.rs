//! Folder Manager - CLI entry point.

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use folder_manager::{
    cli::Args,
    config::{ConfigStore, UserLocations},
    error::{exit_codes, Error, Result},
    opener::{open_workspace, SystemOpener},
    output::{print_error, print_provisioned, print_warning},
    prompt::Prompter,
    provision::FolderProvisioner,
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(Error::Usage(usage)) => {
            eprint!("{}", usage);
            ExitCode::from(exit_codes::USAGE_ERROR as u8)
        }
        Err(e) => {
            print_error(&e.to_string());
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn run() -> Result<()> {
    // Parse CLI arguments
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.print()?;
            return Ok(());
        }
        Err(e) => return Err(Error::Usage(e.render().to_string())),
    };

    // Set up logging; stdout is reserved for the dialogue
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Resolve where the base directory is stored
    let locations = UserLocations::resolve()?;
    let store = ConfigStore::from_locations(&locations, args.config.clone());
    tracing::debug!("Using config file {}", store.path().display());

    // Provision the project folder
    let provisioner = FolderProvisioner::new(store, args.create_mode());
    let mut prompter = Prompter::stdio();
    let provisioned = provisioner.provision(&args.name, &mut prompter)?;

    print_provisioned(&provisioned);

    if args.no_open {
        return Ok(());
    }

    // Opening is best effort; the folder is already in place
    let failures = open_workspace(&SystemOpener, &provisioned.path);
    if failures > 0 {
        print_warning(&format!(
            "{} folder(s) could not be opened in the file browser",
            failures
        ));
    }

    Ok(())
}
