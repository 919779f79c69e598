//! The two names printed under the greeting, built-in or loaded from disk.

use std::{
    error::Error,
    fmt::{self, Display},
    io::{BufRead, BufReader, Read},
    path::Path,
};

/// Built-in user name.
pub const USUARIO: &str = "Ana";
/// Built-in instructor name.
pub const DOCENTE: &str = "Luis";

// --- Roster ---
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Roster {
    pub usuario: String,
    pub docente: String,
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            usuario: USUARIO.to_owned(),
            docente: DOCENTE.to_owned(),
        }
    }
}

// --- Error Handling ---
#[derive(Debug)]
pub struct RosterError {
    pub line: usize,
    pub kind: RosterErrorKind,
}

#[derive(Debug)]
pub enum RosterErrorKind {
    Io(std::io::Error),
    Malformed(String),
    UnknownKey(String),
    MissingKey(&'static str),
}

impl Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            RosterErrorKind::Io(e) if self.line == 0 => write!(f, "cannot read roster: {e}"),
            RosterErrorKind::Io(e) => write!(f, "cannot read roster on line {}: {e}", self.line),
            RosterErrorKind::Malformed(text) => {
                write!(f, "line {}: expected `key = value`, got '{text}'", self.line)
            }
            RosterErrorKind::UnknownKey(k) => write!(f, "line {}: unknown key `{k}`", self.line),
            RosterErrorKind::MissingKey(k) => write!(f, "roster is missing `{k}`"),
        }
    }
}
impl Error for RosterError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            RosterErrorKind::Io(e) => Some(e),
            _ => None,
        }
    }
}

// --- Helpers ---

/// Strip `export` and `const`/`let` in front of the key.
fn clean_key(raw: &str) -> &str {
    let mut k = raw.trim();
    for prefix in ["export ", "const ", "let "] {
        k = k.strip_prefix(prefix).map_or(k, str::trim_start);
    }
    k
}

/// Cut a `// …` comment that sits outside any quotes.
fn strip_trailing_comment(raw: &str) -> &str {
    let mut quote = None;
    for (i, c) in raw.char_indices() {
        match (quote, c) {
            (Some(q), _) if c == q => quote = None,
            (None, '"' | '\'') => quote = Some(c),
            (None, '/') if raw[i..].starts_with("//") => return &raw[..i],
            _ => {}
        }
    }
    raw
}

fn clean_value(raw: &str) -> &str {
    let v = strip_trailing_comment(raw).trim();
    let v = v.strip_suffix(';').map_or(v, str::trim_end);
    ['"', '\'']
        .into_iter()
        .find_map(|q| v.strip_prefix(q).and_then(|s| s.strip_suffix(q)))
        .unwrap_or(v)
}

// --- Loader ---

/// Parse `key = value` lines.  Keys `usuario` and `docente` are both required.
///
/// # Errors
/// I/O failures, lines without `=`, keys other than the two known ones and
/// either key being absent.
pub fn read_roster<R: Read>(src: R) -> Result<Roster, RosterError> {
    let rdr = BufReader::new(src);
    let (mut usuario, mut docente) = (None, None);

    for (idx, line) in rdr.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|e| RosterError {
            line: line_no,
            kind: RosterErrorKind::Io(e),
        })?;
        let text = if line_no == 1 {
            line.trim_start_matches('\u{feff}').trim()
        } else {
            line.trim()
        };
        if text.is_empty() || text.starts_with('#') || text.starts_with("//") {
            continue;
        }

        let Some((k, v)) = text.split_once('=') else {
            return Err(RosterError {
                line: line_no,
                kind: RosterErrorKind::Malformed(text.to_owned()),
            });
        };
        let value = clean_value(v).to_owned();
        match clean_key(k) {
            "usuario" => usuario = Some(value),
            "docente" => docente = Some(value),
            other => {
                return Err(RosterError {
                    line: line_no,
                    kind: RosterErrorKind::UnknownKey(other.to_owned()),
                });
            }
        }
    }

    let missing = |key| RosterError {
        line: 0,
        kind: RosterErrorKind::MissingKey(key),
    };
    Ok(Roster {
        usuario: usuario.ok_or_else(|| missing("usuario"))?,
        docente: docente.ok_or_else(|| missing("docente"))?,
    })
}

/// # Errors
/// See [`read_roster`]; additionally fails when `path` cannot be opened.
pub fn read_roster_from_path(path: &Path) -> Result<Roster, RosterError> {
    let file = std::fs::File::open(path).map_err(|e| RosterError {
        line: 0,
        kind: RosterErrorKind::Io(e),
    })?;
    read_roster(file)
}
