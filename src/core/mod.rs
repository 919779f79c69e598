//! Aggregates the “business logic” layer.

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod roster;

// re-export frequently-used items for convenience
pub use color::{AnsiCode, ColorError, ColorMode, Palette, colorize};
pub use config::{Config, ConfigBuilder};
pub use constants::{DOCENTE_LABEL, GREETING, GREETING_SEQUENCE, USUARIO_LABEL};
pub use error::SaludoError;
pub use roster::{DOCENTE, Roster, RosterError, USUARIO};
