//! Plain text output

use crate::domain::AppVersion;
use crate::output::OutputFormatter;
use std::io::Write;

/// Writes the version followed by a newline and nothing else
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn format(&self, version: &AppVersion, writer: &mut dyn Write) -> std::io::Result<()> {
        writeln!(writer, "{}", version.version)
    }
}
