//! JSON output helpers for CLI commands.
//!
//! Every event is one JSON object per line (NDJSON) on stdout.

use std::io::{self, Write};

use crate::domain::value_objects::ConfigWarning;

/// Write a single NDJSON event.
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Write a raw JSON event to stdout.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

/// Report configuration warnings, as JSON events or on stderr.
pub fn print_config_warnings(warnings: &[ConfigWarning], json: bool) -> io::Result<()> {
    for warning in warnings {
        if json {
            emit(serde_json::json!({
                "event": "warning",
                "kind": "config",
                "key": warning.key,
                "file": warning.file.display().to_string(),
                "line": warning.line,
                "suggestion": warning.suggestion,
            }))?;
        } else {
            eprintln!("warning: {}", warning);
        }
    }
    Ok(())
}
