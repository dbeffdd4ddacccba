//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs lines as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    lines: Vec<LineData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct LineData {
    /// The line text
    pub text: String,
    /// 1-based position in the input
    pub line: usize,
    /// Display normal form used for comparison
    pub normalized: String,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            lines: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_line(&mut self, line: &str, line_number: usize, key: &str) -> Result<()> {
        self.lines.push(LineData {
            text: line.to_string(),
            line: line_number,
            normalized: key.to_string(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.lines)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.lines)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
