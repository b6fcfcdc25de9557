//! Launches the mapped comparison application for a Git diff or merge.
//!
//! Git invokes this binary through the `cmd` templates the configurator
//! wrote into the client's git-config: two files for a diff, four for a
//! merge. Anything else prints usage and launches nothing.

use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing::{error, info};

use exttool_cli::{logging, paths};
use exttool_launch::{DispatchRequest, ToolStore, dispatch};

const LOG_FILE: &str = "git-exttool-launcher.log";

const USAGE_NOTE: &str = "\
Pass exactly two files for a diff (local, remote) or exactly four for a
merge (base, local, remote, merged). Any other count prints this help and
performs no launch.";

#[derive(Parser, Debug)]
#[command(
    name = "git-exttool-launcher",
    version,
    about = "Launch the comparison application mapped to the files' extension",
    after_help = USAGE_NOTE,
    after_long_help = USAGE_NOTE
)]
struct Cli {
    /// LOCAL and REMOTE for a diff; BASE, LOCAL, REMOTE and MERGED for a
    /// merge
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,
}

fn main() {
    logging::init(LOG_FILE);
    info!("START: Launching Git external tool");

    let cli = Cli::parse();

    match DispatchRequest::new(cli.files) {
        Ok(request) => {
            let store = ToolStore::new(paths::executable_dir());
            let _ = dispatch(&request, &store);
        }
        Err(e) => {
            error!("{e}");
            eprintln!("{}: {e}", "error".red().bold());
            let _ = Cli::command().print_long_help();
        }
    }

    info!("END: Launching Git external tool");
}
