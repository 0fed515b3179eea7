use std::process::ExitCode;

use clap::Parser;

use plan_scout::cli::{Cli, EXIT_ERROR};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
