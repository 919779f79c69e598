//! The six-line greeting: one coloured line per palette entry, then the
//! labelled roster.
//!
//! Every line is formatted in full before it is written so a sink never sees
//! half a colour span.  Lines already written stay written when a later write
//! fails.

use std::io::Write;

use crate::core::{
    color::colorize,
    config::Config,
    constants::{DOCENTE_LABEL, USUARIO_LABEL},
    error::SaludoError,
};

/// Borrowing view over a [`Config`] that yields the output lines in order.
pub struct Greeting<'a> {
    cfg: &'a Config,
    colored: bool,
}

impl<'a> Greeting<'a> {
    /// `colored` is the already-resolved colour mode.
    #[must_use]
    pub const fn new(cfg: &'a Config, colored: bool) -> Self {
        Self { cfg, colored }
    }

    /// Lines without their trailing `\n`.
    pub fn lines(&self) -> impl Iterator<Item = String> + 'a {
        let (cfg, escapes) = (self.cfg, self.colored);
        let colored = cfg.sequence.iter().map(move |code| {
            if escapes {
                colorize(code, &cfg.message)
            } else {
                cfg.message.clone()
            }
        });
        let roster = &cfg.roster;
        colored.chain([
            labelled(USUARIO_LABEL, &roster.usuario),
            labelled(DOCENTE_LABEL, &roster.docente),
        ])
    }

    /// # Errors
    /// Propagates the first failed write or flush.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<(), SaludoError> {
        for line in self.lines() {
            writeln!(out, "{line}")?;
        }
        out.flush()?;
        Ok(())
    }
}

/// `label` and `value` joined by a single space.
fn labelled(label: &str, value: &str) -> String {
    format!("{label} {value}")
}

/// One-shot: resolve the colour mode and write the whole block.
///
/// # Errors
/// See [`Greeting::write_to`].
pub fn write_greeting<W: Write>(cfg: &Config, out: &mut W) -> Result<(), SaludoError> {
    Greeting::new(cfg, cfg.color_mode.enabled()).write_to(out)
}
