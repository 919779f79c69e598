//! Zero-alloc ANSI colour wrapper, plus the greeting palette and colour mode.

use std::{fmt, str};

#[derive(Debug, PartialEq, Eq)]
pub enum ColorError {
    UnknownName(String),
    InvalidHexDigit,
    InvalidHexLength,
}

// --- AnsiCode ---
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnsiCode {
    Static(&'static str),
    Inline { buf: [u8; 20], len: u8 },
}

impl AnsiCode {
    #[must_use]
    pub const fn black() -> Self {
        Self::Static("\x1b[30m")
    }
    #[must_use]
    pub const fn red() -> Self {
        Self::Static("\x1b[31m")
    }
    #[must_use]
    pub const fn green() -> Self {
        Self::Static("\x1b[32m")
    }
    #[must_use]
    pub const fn yellow() -> Self {
        Self::Static("\x1b[33m")
    }
    #[must_use]
    pub const fn blue() -> Self {
        Self::Static("\x1b[34m")
    }
    #[must_use]
    pub const fn magenta() -> Self {
        Self::Static("\x1b[35m")
    }
    #[must_use]
    pub const fn cyan() -> Self {
        Self::Static("\x1b[36m")
    }
    #[must_use]
    pub const fn white() -> Self {
        Self::Static("\x1b[37m")
    }
    /// Default foreground colour.  Closes a span without touching bold etc.
    #[inline]
    #[must_use]
    pub const fn fg_reset() -> Self {
        Self::Static("\x1b[39m")
    }

    /// True-colour escape `ESC[38;2;R;G;Bm`.
    #[must_use]
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        let mut buf = [0u8; 20];
        buf[..7].copy_from_slice(b"\x1b[38;2;");
        let mut len = 7;

        for (i, v) in [r, g, b].into_iter().enumerate() {
            len += write_u8(&mut buf[len..], v);
            if i != 2 {
                buf[len] = b';';
                len += 1;
            }
        }
        buf[len] = b'm';
        len += 1;
        // at most 19 bytes
        #[allow(clippy::cast_possible_truncation)]
        let len = len as u8;
        Self::Inline { buf, len }
    }

    /// Parse colour names (case-insensitive) or `#rrggbb`.
    ///
    /// # Errors
    /// `UnknownName` for anything that is neither a known name nor starts
    /// with `#`; the hex variants when the `#` form is malformed.
    pub fn from_name(s: &str) -> Result<Self, ColorError> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "black" => Ok(Self::black()),
            "red" => Ok(Self::red()),
            "green" => Ok(Self::green()),
            "yellow" => Ok(Self::yellow()),
            "blue" => Ok(Self::blue()),
            "magenta" => Ok(Self::magenta()),
            "cyan" => Ok(Self::cyan()),
            "white" => Ok(Self::white()),
            _ if s.starts_with('#') => Self::from_hex(s),
            _ => Err(ColorError::UnknownName(s.to_owned())),
        }
    }

    /// # Errors
    /// Fails unless `hex` is exactly six hex digits after an optional `#`.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let h = hex.trim_start_matches('#');
        if h.len() != 6 || !h.is_ascii() {
            return Err(ColorError::InvalidHexLength);
        }
        // `from_str_radix` accepts a leading `+`
        if !h.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHexDigit);
        }
        let byte = |s: &str| u8::from_str_radix(s, 16).map_err(|_| ColorError::InvalidHexDigit);
        Ok(Self::rgb(byte(&h[..2])?, byte(&h[2..4])?, byte(&h[4..])?))
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            // `rgb` only ever writes ASCII
            Self::Inline { buf, len } => str::from_utf8(&buf[..*len as usize]).unwrap_or(""),
        }
    }
}

impl str::FromStr for AnsiCode {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

// --- Helpers ---
fn write_u8(dst: &mut [u8], mut n: u8) -> usize {
    let mut tmp = [0u8; 3];
    let mut i = 3;
    loop {
        i -= 1;
        tmp[i] = b'0' + n % 10;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    let len = 3 - i;
    dst[..len].copy_from_slice(&tmp[i..]);
    len
}

impl fmt::Display for AnsiCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wrap `text` in colour + foreground-reset sequence.
#[inline]
#[must_use]
pub fn colorize(c: &AnsiCode, text: &str) -> String {
    format!("{c}{text}{}", AnsiCode::fg_reset())
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::UnknownName(n) => write!(f, "unknown colour `{n}`"),
            ColorError::InvalidHexDigit => f.write_str("invalid hex colour digit"),
            ColorError::InvalidHexLength => f.write_str("hex colour must be exactly 6 digits"),
        }
    }
}
impl std::error::Error for ColorError {}

// --- Palette ---

/// The four colours the greeting cycles through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Palette {
    Red,
    Blue,
    Yellow,
    Green,
}

impl Palette {
    #[must_use]
    pub const fn code(self) -> AnsiCode {
        match self {
            Self::Red => AnsiCode::red(),
            Self::Blue => AnsiCode::blue(),
            Self::Yellow => AnsiCode::yellow(),
            Self::Green => AnsiCode::green(),
        }
    }
}

/// When escapes are emitted at all.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    #[default]
    Always,
    /// Only when stdout is a terminal
    Auto,
    Never,
}

impl ColorMode {
    /// Collapse `Auto` against the current stdout.
    #[must_use]
    pub fn enabled(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => terminal_size::terminal_size_of(std::io::stdout()).is_some(),
        }
    }
}
