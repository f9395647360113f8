use std::process;

use clap::Parser;

use prompt_architect::{cli, init};

fn main() {
    init();

    let args = cli::Cli::parse();
    if let Err(err) = cli::run(args) {
        tracing::error!(error = %err, "Command failed");
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
