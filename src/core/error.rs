//! Centralised error types used across the crate.

use std::{error::Error, fmt, io};

use crate::core::{color::ColorError, roster::RosterError};

/// Top-level error type bubbled up by public APIs.
#[derive(Debug)]
pub enum SaludoError {
    Io(io::Error),
    Color(ColorError),
    Roster(RosterError),
}

impl fmt::Display for SaludoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaludoError::Io(e) => write!(f, "{e}"),
            SaludoError::Color(e) => write!(f, "{e}"),
            SaludoError::Roster(e) => write!(f, "{e}"),
        }
    }
}
impl Error for SaludoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SaludoError::Io(e) => Some(e),
            SaludoError::Color(e) => Some(e),
            SaludoError::Roster(e) => Some(e),
        }
    }
}

// automatic conversions
impl From<io::Error> for SaludoError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<ColorError> for SaludoError {
    fn from(e: ColorError) -> Self {
        Self::Color(e)
    }
}
impl From<RosterError> for SaludoError {
    fn from(e: RosterError) -> Self {
        Self::Roster(e)
    }
}
