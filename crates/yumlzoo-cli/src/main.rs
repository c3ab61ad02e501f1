//! yumlzoo CLI - Structural statistics for yUML class diagrams

mod cli;
mod report;

use clap::Parser;

fn main() {
    // Logging is initialized inside run() once CLI flags are known
    let cli_args = cli::Cli::parse();

    let mut app = cli::YumlzooApp::new();

    if let Err(e) = app.run(cli_args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
