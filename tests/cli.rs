//! End-to-end runs of the `saludo` binary.

use std::{
    io::Write,
    process::{Command, Output},
};

const EXPECTED: &str = "\x1b[31mHola desde Node JS\x1b[39m\n\
                        \x1b[34mHola desde Node JS\x1b[39m\n\
                        \x1b[33mHola desde Node JS\x1b[39m\n\
                        \x1b[32mHola desde Node JS\x1b[39m\n\
                        Usuario: Ana\n\
                        Docente: Luis\n";

fn saludo(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_saludo"))
        .args(args)
        .output()
        .expect("binary runs")
}

#[test]
fn no_arguments_prints_six_lines_and_exits_zero() {
    let out = saludo(&[]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), EXPECTED);
    assert!(out.stderr.is_empty());
}

#[test]
fn repeated_runs_are_identical() {
    assert_eq!(saludo(&[]).stdout, saludo(&[]).stdout);
}

#[test]
fn roster_file_replaces_builtin_names() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    writeln!(f, "export const usuario = \"Marta\";").unwrap();
    writeln!(f, "export const docente = \"Jorge\";").unwrap();

    let out = saludo(&["--roster", f.path().to_str().unwrap()]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[4], "Usuario: Marta");
    assert_eq!(lines[5], "Docente: Jorge");
}

#[test]
fn missing_roster_fails_before_any_output() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("modulo.js");

    let out = saludo(&["--roster", missing.to_str().unwrap()]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.starts_with("error: cannot read roster"), "{stderr}");
}

#[test]
fn incomplete_roster_fails_before_any_output() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    writeln!(f, "usuario = Ana").unwrap();

    let out = saludo(&["--roster", f.path().to_str().unwrap()]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("missing `docente`"));
}

#[test]
fn color_never_strips_escapes() {
    let out = saludo(&["--color", "never"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(
        stdout,
        "Hola desde Node JS\nHola desde Node JS\nHola desde Node JS\nHola desde Node JS\n\
         Usuario: Ana\nDocente: Luis\n"
    );
}

#[test]
fn color_auto_is_plain_when_piped() {
    let out = saludo(&["--color", "auto"]);
    assert!(out.status.success());
    assert!(!out.stdout.contains(&0x1b));
}

#[test]
fn debug_goes_to_stderr_only() {
    let out = saludo(&["--debug"]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), EXPECTED);
    assert!(String::from_utf8_lossy(&out.stderr).contains("roster source: built-in"));
}

#[test]
fn colors_subcommand_lists_palette() {
    let out = saludo(&["colors", "--color", "never"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Colores disponibles:"));
    for name in ["red", "blue", "yellow", "green", "#505050"] {
        assert!(stdout.lines().any(|l| l.starts_with(name)), "{name} missing");
    }
}

#[test]
fn sequence_recolours_the_greeting() {
    let out = saludo(&["--sequence", "GREEN,#0a80ff"]);
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "\x1b[32mHola desde Node JS\x1b[39m\n\
         \x1b[38;2;10;128;255mHola desde Node JS\x1b[39m\n\
         Usuario: Ana\n\
         Docente: Luis\n"
    );
}

#[test]
fn unknown_colour_fails_before_any_output() {
    let out = saludo(&["--sequence", "red,chartreuse"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert_eq!(
        String::from_utf8(out.stderr).unwrap(),
        "error: unknown colour `chartreuse`\n"
    );
}

#[test]
fn signed_hex_colour_is_rejected() {
    let out = saludo(&["--sequence", "#+f+f+f"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("invalid hex colour digit"));
}

#[test]
fn unexpected_argument_is_rejected() {
    let out = saludo(&["--nope"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
}
