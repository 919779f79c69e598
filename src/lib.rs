//! Public-facing crate root – re-exports.

pub mod cli;
pub mod core;
pub mod render;

pub use crate::core::{
    color::{AnsiCode, ColorError, ColorMode, Palette, colorize},
    config::{Config, ConfigBuilder},
    constants::{GREETING, GREETING_SEQUENCE},
    error::SaludoError,
    roster::{DOCENTE, Roster, RosterError, USUARIO},
};

pub use crate::render::{Greeting, write_greeting};

