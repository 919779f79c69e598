use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::color::ColorMode;

/// Top-level CLI structure.
#[derive(Parser, Debug)]
#[command(
    name = "saludo",
    about = "Prints a coloured greeting followed by the user and instructor names"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Command>,

    #[command(flatten)]
    pub greet: GreetArgs,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show available colour names / hex syntax
    Colors,
}

/// `saludo [OPTIONS]`
#[derive(clap::Args, Debug, Default)]
pub struct GreetArgs {
    /// Load `usuario` / `docente` from a `key = value` file
    #[arg(long, value_name = "FILE")]
    pub roster: Option<PathBuf>,

    /// Colours of the greeting lines, comma separated (names or `#RRGGBB`)
    #[arg(long, value_name = "COLOR,...", value_delimiter = ',')]
    pub sequence: Vec<String>,

    /// When to emit colour escapes
    #[arg(long, value_enum, global = true, default_value_t = ColorMode::Always)]
    pub color: ColorMode,

    /// Emit timing diagnostics
    #[arg(long)]
    pub debug: bool,
}
