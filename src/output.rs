//! Output formatting for command line results.

use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use tracing::debug;

/// Logs a value using Rust's debug pretty-print format.
pub fn print_pretty<T: std::fmt::Debug>(value: &T) {
    debug!("{:#?}", value);
}

/// Writes a value as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write>(mut writer: W, value: &impl Serialize) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Prints a value as pretty-printed JSON on stdout.
pub fn print_json(value: &impl Serialize) -> Result<()> {
    write_json(std::io::stdout().lock(), value)
}
