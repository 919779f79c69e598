//! A collection of constants.

use crate::core::color::Palette;

/// The message every coloured line carries.
pub const GREETING: &str = "Hola desde Node JS";

/// Colour order of the greeting lines, top to bottom.
pub const GREETING_SEQUENCE: [Palette; 4] =
    [Palette::Red, Palette::Blue, Palette::Yellow, Palette::Green];

/// Label printed in front of the user name
pub const USUARIO_LABEL: &str = "Usuario:";
/// Label printed in front of the instructor name
pub const DOCENTE_LABEL: &str = "Docente:";
