//! reqsift binary entry point

use clap::Parser;
use reqsift_cli::commands::Cli;

fn main() {
    if let Err(err) = reqsift_cli::run(Cli::parse()) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
