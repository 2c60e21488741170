//! roster CLI entry point
//!
//! Parses arguments, then hands off to the CLI module. Errors go to stderr
//! with a non-zero exit code.

use roster::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
