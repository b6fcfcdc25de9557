//! Configures a third-party Git client to use the external diff/merge tool.
//!
//! Takes one positional argument, the JSON configuration request file,
//! resolved relative to this executable's directory. Success and failure are
//! reported through the log file; the process exit code is not meaningful.

use clap::{CommandFactory, Parser};
use tracing::{error, info};

use exttool_cli::{logging, paths};
use exttool_configure::{ClientKind, configurator_for, differ, setup};

const LOG_FILE: &str = "git-exttool-configure.log";

const LEVEL_TABLE: &str = "\
Where <CONFIG_FILE> is the JSON file containing the configuration details for
the Git client, e.g. Sourcetree_Config.json.

If the file is not present, the tool creates one for the latest installed
version of the client and configures it at the client's default level:

  |=========================|===============|
  | Git client              | Default level |
  |=========================|===============|
  | Microsoft Visual Studio | Client        |
  |-------------------------|---------------|
  | Atlassian Sourcetree    | Client        |
  |-------------------------|---------------|
  | Git Cola                | Global        |
  |-------------------------|---------------|
  | GitKraken               | Global        |
  |=========================|===============|";

#[derive(Parser, Debug)]
#[command(
    name = "git-exttool-configure",
    version,
    about = "Configure a Git client to use the external diff/merge tool",
    after_help = LEVEL_TABLE,
    after_long_help = LEVEL_TABLE
)]
struct Cli {
    /// JSON configuration request file, resolved relative to the
    /// executable's directory (e.g. Sourcetree_Config.json)
    config_file: Option<String>,
}

fn main() {
    logging::init(LOG_FILE);
    info!("START: Configuring Git external tool");

    let cli = Cli::parse();

    match cli.config_file.as_deref() {
        None => print_usage(),
        Some(argument) if argument == "?" || argument.eq_ignore_ascii_case("help") => {
            print_usage()
        }
        Some(config_file) => {
            if run(config_file) {
                info!("Git external tool configured successfully");
            } else {
                error!("Git external tool configuration failed");
            }
        }
    }

    info!("END: Configuring Git external tool");
}

fn print_usage() {
    let _ = Cli::command().print_long_help();
}

fn run(config_file: &str) -> bool {
    let Some(differ) = differ::locate_differ() else {
        error!("Sequence-file differ not found. Install it and run this tool again");
        return false;
    };
    info!("Sequence-file differ found at '{}'", differ.display());

    let Some(kind) = ClientKind::from_config_file_name(config_file) else {
        error!("Client named by '{config_file}' is not supported");
        return false;
    };

    let exe_dir = paths::executable_dir();
    let request_path = exe_dir.join(config_file);
    let configurator = configurator_for(kind);

    if !request_path.is_file() {
        info!("Configuration file not found: {}", request_path.display());
        info!(
            "Creating a default configuration file for {}",
            kind.display_name()
        );
        if !configurator.create_default_request(&request_path) {
            return false;
        }
    }

    let launcher = match setup::install_support_files(&exe_dir) {
        Ok(launcher) => launcher,
        Err(e) => {
            error!("Launcher and supporting files could not be copied: {e}");
            return false;
        }
    };

    info!(
        "Configuring '{}' as the Git external tool",
        kind.display_name()
    );
    configurator.configure(&request_path, &launcher)
}
