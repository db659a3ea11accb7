use std::io::{self, BufRead, BufWriter, IsTerminal, Write};
use std::process::ExitCode;

use clap::Parser;

use tracetab::cli::{Cli, ColorMode};
use tracetab::config::Config;
use tracetab::event::{EventKind, decode};
use tracetab::render::{Renderer, format_diagnostic};

fn main() -> ExitCode {
    // Reset SIGPIPE to default behavior so the upstream tracer gets a clean
    // SIGPIPE signal instead of a BrokenPipeError when tracetab exits early.
    reset_sigpipe();

    let cli = Cli::parse();

    let config = match Config::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("tracetab: {e}");
            return ExitCode::from(1);
        }
    };

    let use_color = resolve_color_mode(config.color_mode);

    let renderer = Renderer::new(&config.spec);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    let mut line_buf = String::new();

    // Header goes out exactly once, before the first data row. It is a pure
    // function of the column specification — no event needed.
    renderer.header(&mut line_buf);
    match writeln!(writer, "{line_buf}") {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => return ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("tracetab: write error: {e}");
            return ExitCode::from(2);
        }
    }

    let reader = stdin.lock();
    for line_result in reader.lines() {
        let line = match line_result {
            Ok(l) => l,
            Err(e) if e.kind() == io::ErrorKind::InvalidData => continue,
            Err(e) => {
                eprintln!("tracetab: read error: {e}");
                return ExitCode::from(2);
            }
        };

        // Blank lines between events are not part of the wire contract.
        if line.trim().is_empty() {
            continue;
        }

        let event = match decode(&line) {
            Ok(event) => event,
            Err(e) => {
                // Malformed line: report and keep streaming.
                eprintln!("tracetab: {e}");
                continue;
            }
        };

        match event.kind {
            EventKind::Normal => {
                line_buf.clear();
                renderer.row(&event, &mut line_buf);
                if let Err(e) = writeln!(writer, "{line_buf}") {
                    if e.kind() == io::ErrorKind::BrokenPipe {
                        return ExitCode::SUCCESS;
                    }
                    eprintln!("tracetab: write error: {e}");
                    return ExitCode::from(2);
                }
            }
            EventKind::Err | EventKind::Warn | EventKind::Debug | EventKind::Info => {
                line_buf.clear();
                format_diagnostic(&event, use_color, &mut line_buf);
                eprintln!("{line_buf}");
            }
            // Unrecognized kinds are dropped without any report.
            EventKind::Unknown => {}
        }
    }

    if let Err(e) = writer.flush() {
        if e.kind() == io::ErrorKind::BrokenPipe {
            return ExitCode::SUCCESS;
        }
        eprintln!("tracetab: flush error: {e}");
        return ExitCode::from(2);
    }

    ExitCode::SUCCESS
}

fn resolve_color_mode(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            if !io::stderr().is_terminal() {
                return false;
            }
            if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
                return false;
            }
            if std::env::var("TERM").is_ok_and(|v| v == "dumb") {
                return false;
            }
            true
        }
    }
}

/// Reset SIGPIPE to the default (terminate) behavior.
///
/// By default, Rust ignores SIGPIPE to surface `BrokenPipe` I/O errors.
/// For a stream filter like `tracetab`, this causes the *upstream* writer
/// (the trace session feeding stdin) to receive a broken-pipe error when
/// `tracetab` exits. Restoring `SIG_DFL` lets the OS handle the signal
/// normally.
#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn reset_sigpipe() {}
