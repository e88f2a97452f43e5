use clap::Parser;

use envus::cli::{Cli, Output};
use envus::error::exit_code;

fn main() {
    let cli = Cli::parse();
    let quiet = cli.quiet;

    if let Err(e) = cli.run() {
        Output::new(false, quiet).error(&format!("{:#}", e));
        std::process::exit(exit_code(&e));
    }
}
