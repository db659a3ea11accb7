//! Command-line argument definitions for `tracetab`.
//!
//! Uses [`clap`] derive macros for argument parsing.

use clap::{Parser, ValueEnum};

/// Render JSON trace event streams from stdin as column-aligned tables.
///
/// Reads one JSON trace event per line from stdin, writes a header line and
/// one aligned row per data event to stdout. Diagnostic events and decode
/// errors go to stderr; the stream always continues.
#[derive(Debug, Parser)]
#[command(name = "tracetab", version, about, long_about = None)]
pub struct Cli {
    /// Column layout for rendered rows.
    ///
    /// `columns` renders all default columns; `custom-columns=<col>,...`
    /// renders the named columns in the given order. Unknown column names
    /// are ignored.
    #[arg(short = 'o', long, value_parser = parse_output_arg)]
    pub output: Option<OutputArg>,

    /// Control color output for diagnostics on stderr.
    ///
    /// `auto` enables colors only when stderr is a TTY and `NO_COLOR` is unset.
    #[arg(short = 'c', long, value_enum)]
    pub color: Option<ColorMode>,

    /// Path to configuration file.
    #[arg(long)]
    pub config: Option<std::path::PathBuf>,
}

/// Parsed `--output` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputArg {
    /// Default fixed layout.
    Columns,
    /// Explicit ordered column selection.
    CustomColumns(Vec<String>),
}

/// Color output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Enable colors only when stderr is a TTY.
    Auto,
    /// Always enable colors.
    Always,
    /// Never enable colors.
    Never,
}

/// Parse the `--output` argument.
///
/// Accepts `columns` or `custom-columns=<col>[,<col>...]`. The column list
/// must be non-empty, but individual names are not validated here — unknown
/// names are ignored at render time.
fn parse_output_arg(s: &str) -> Result<OutputArg, String> {
    if s == "columns" {
        return Ok(OutputArg::Columns);
    }
    if let Some(list) = s.strip_prefix("custom-columns=") {
        let tokens: Vec<String> = list
            .split(',')
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        if tokens.is_empty() {
            return Err("custom-columns requires at least one column name".to_string());
        }
        return Ok(OutputArg::CustomColumns(tokens));
    }
    Err(format!(
        "invalid output mode '{s}': expected 'columns' or 'custom-columns=<col>,...'"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_arg_columns() {
        assert_eq!(parse_output_arg("columns").unwrap(), OutputArg::Columns);
    }

    #[test]
    fn test_parse_output_arg_custom() {
        let parsed = parse_output_arg("custom-columns=node,pid,comm").unwrap();
        assert_eq!(
            parsed,
            OutputArg::CustomColumns(vec![
                "node".to_string(),
                "pid".to_string(),
                "comm".to_string()
            ])
        );
    }

    #[test]
    fn test_parse_output_arg_custom_trims_whitespace() {
        let parsed = parse_output_arg("custom-columns= node , pid ").unwrap();
        assert_eq!(
            parsed,
            OutputArg::CustomColumns(vec!["node".to_string(), "pid".to_string()])
        );
    }

    #[test]
    fn test_parse_output_arg_custom_keeps_unknown_tokens() {
        // Unknown names are a render-time no-op, not a CLI error.
        let parsed = parse_output_arg("custom-columns=node,badcol").unwrap();
        assert_eq!(
            parsed,
            OutputArg::CustomColumns(vec!["node".to_string(), "badcol".to_string()])
        );
    }

    #[test]
    fn test_parse_output_arg_empty_custom_list() {
        assert!(parse_output_arg("custom-columns=").is_err());
        assert!(parse_output_arg("custom-columns=,,").is_err());
    }

    #[test]
    fn test_parse_output_arg_invalid() {
        let err = parse_output_arg("table").unwrap_err();
        assert!(err.contains("invalid output mode"));
        assert!(parse_output_arg("").is_err());
        assert!(parse_output_arg("custom-columns").is_err());
    }
}
