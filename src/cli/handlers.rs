use std::{io::Write, time::Instant};

use crate::{
    core::{
        color::{AnsiCode, ColorMode, colorize},
        config::Config,
        error::SaludoError,
        roster::{Roster, read_roster_from_path},
    },
    render::write_greeting,
};

use super::parse::GreetArgs;

pub fn greet(a: &GreetArgs) -> Result<(), SaludoError> {
    // Roster and colours are resolved before anything reaches stdout.
    let t_load = Instant::now();
    let roster = match &a.roster {
        Some(path) => read_roster_from_path(path)?,
        None => Roster::default(),
    };
    let dur_load = t_load.elapsed().as_micros();

    let mut b = Config::builder().color_mode(a.color).roster(roster);
    if !a.sequence.is_empty() {
        let codes = a
            .sequence
            .iter()
            .map(|name| name.parse::<AnsiCode>())
            .collect::<Result<Vec<_>, _>>()?;
        b = b.sequence(codes);
    }
    let cfg = b.build();

    let t_write = Instant::now();
    let mut out = std::io::stdout().lock();
    write_greeting(&cfg, &mut out)?;
    let dur_write = t_write.elapsed().as_micros();

    if a.debug {
        let source = a
            .roster
            .as_ref()
            .map_or_else(|| "built-in".to_owned(), |p| p.display().to_string());
        eprintln!("roster source: {source}");
        eprintln!("roster load: {dur_load} µs   greeting: {dur_write} µs");
    }
    Ok(())
}

/// Pretty-print available colour names + an example hex code.
pub fn colors(mode: ColorMode) -> Result<(), SaludoError> {
    let paint = |c: &AnsiCode, text: &str| {
        if mode.enabled() {
            colorize(c, text)
        } else {
            text.to_owned()
        }
    };

    let mut out = std::io::stdout().lock();
    writeln!(out, "\nColores disponibles:")?;
    for name in [
        "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white",
    ] {
        let code = AnsiCode::from_name(name)?;
        writeln!(out, "{}", paint(&code, name))?;
    }
    writeln!(
        out,
        "{}  (#505050 o cualquier otro #RRGGBB, p. ej. --sequence red,#505050)\n",
        paint(&AnsiCode::rgb(0x50, 0x50, 0x50), "#505050")
    )?;
    out.flush()?;
    Ok(())
}
