//! JSON output formatter for machine processing

use crate::domain::AppVersion;
use crate::output::OutputFormatter;
use std::io::Write;

/// JSON formatter, one object per invocation
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, version: &AppVersion, writer: &mut dyn Write) -> std::io::Result<()> {
        serde_json::to_writer(&mut *writer, version)?;
        writeln!(writer)
    }
}
