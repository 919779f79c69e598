mod handlers;
pub mod parse;

use clap::Parser;
pub use parse::Cli;

use crate::core::error::SaludoError;

/// Parse `std::env::args` and dispatch.
///
/// # Errors
/// Whatever the selected handler returns.
pub fn run() -> Result<(), SaludoError> {
    let cli = parse::Cli::parse();
    match cli.cmd {
        None => handlers::greet(&cli.greet),
        Some(parse::Command::Colors) => handlers::colors(cli.greet.color),
    }
}
