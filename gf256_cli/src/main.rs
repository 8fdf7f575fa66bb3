mod cli;

use std::process::ExitCode;

use clap::Parser;

use crate::cli::{Cli, USAGE};

fn main() -> ExitCode {
    env_logger::init();

    match Cli::try_parse() {
        Ok(args) => cli::run(args.mode()),
        Err(err) => {
            log::debug!("rejected command line: {}", err);
            println!("{}", USAGE);
            ExitCode::FAILURE
        }
    }
}
