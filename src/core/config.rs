//! Run-time configuration object + fluent builder.

use crate::core::{
    color::{AnsiCode, ColorMode, Palette},
    constants::{GREETING, GREETING_SEQUENCE},
    roster::Roster,
};

/// Immutable parameters handed to the greeting writer.
#[derive(Debug, Clone)]
pub struct Config {
    pub message: String,
    pub sequence: Vec<AnsiCode>,
    pub color_mode: ColorMode,
    pub roster: Roster,
}

impl Config {
    #[inline]
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

impl Default for Config {
    fn default() -> Self {
        ConfigBuilder::new().build()
    }
}

/// Fluent builder with zero allocation until `build`.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    message: Option<String>,
    sequence: Option<Vec<AnsiCode>>,
    color_mode: ColorMode,
    roster: Option<Roster>,
}

impl ConfigBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn message(mut self, m: impl Into<String>) -> Self {
        self.message = Some(m.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn sequence(mut self, s: impl IntoIterator<Item = AnsiCode>) -> Self {
        self.sequence = Some(s.into_iter().collect());
        self
    }
    #[inline]
    #[must_use]
    pub fn color_mode(mut self, m: ColorMode) -> Self {
        self.color_mode = m;
        self
    }
    #[inline]
    #[must_use]
    pub fn roster(mut self, r: Roster) -> Self {
        self.roster = Some(r);
        self
    }

    #[must_use]
    pub fn build(self) -> Config {
        Config {
            message: self.message.unwrap_or_else(|| GREETING.to_owned()),
            sequence: self
                .sequence
                .unwrap_or_else(|| GREETING_SEQUENCE.map(Palette::code).to_vec()),
            color_mode: self.color_mode,
            roster: self.roster.unwrap_or_default(),
        }
    }
}
