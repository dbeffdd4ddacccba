//! Sort command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use super::ComparatorArgs;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, OutputFormat, OutputFormatter, TextFormatter};

/// Arguments for the sort command
#[derive(Debug, Args)]
pub struct SortArgs {
    /// Input files or patterns (supports glob; default: stdin)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub comparison: ComparatorArgs,

    /// Reverse the order
    #[arg(short, long)]
    pub reverse: bool,

    /// Keep only the first of lines that compare equal
    #[arg(short, long)]
    pub unique: bool,

    /// Sort in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Output format (default: text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// An input line and its 1-based position
#[derive(Debug, Clone)]
struct Line {
    text: String,
    number: usize,
}

impl AsRef<str> for Line {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl SortArgs {
    /// Execute the sort command
    pub fn execute(&self) -> Result<()> {
        log::debug!("Arguments: {self:?}");

        let file_config = self.comparison.load_config()?;
        let comparator = self.comparison.comparator(&file_config)?;

        let mut lines = self.read_lines()?;
        log::info!("Sorting {} lines", lines.len());

        if self.parallel {
            comparator.par_sort(&mut lines);
        } else {
            comparator.sort(&mut lines);
        }
        if self.unique {
            let before = lines.len();
            comparator.dedup_sorted(&mut lines);
            log::info!("Dropped {} duplicate lines", before - lines.len());
        }
        if self.reverse {
            lines.reverse();
        }

        let format = self.format.unwrap_or(file_config.output.format);
        let writer = self.open_output()?;
        let mut formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => {
                Box::new(JsonFormatter::new(writer, file_config.output.pretty_json))
            }
        };

        for line in &lines {
            let key = match format {
                OutputFormat::Json => comparator.normalize(&line.text),
                OutputFormat::Text => String::new(),
            };
            formatter.format_line(&line.text, line.number, &key)?;
        }
        formatter.finish()
    }

    fn read_lines(&self) -> Result<Vec<Line>> {
        let texts = if self.input.is_empty() || self.input == ["-"] {
            log::debug!("Reading lines from stdin");
            FileReader::read_lines_from(io::stdin().lock())?
        } else {
            let mut texts = Vec::new();
            for path in resolve_patterns(&self.input)? {
                log::debug!("Reading {}", path.display());
                texts.extend(FileReader::read_lines(&path)?);
            }
            texts
        };

        Ok(texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| Line { text, number: i + 1 })
            .collect())
    }

    fn open_output(&self) -> Result<Box<dyn Write + Send + Sync>> {
        Ok(match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(input: &TempDir, output: PathBuf) -> SortArgs {
        SortArgs {
            input: vec![input.path().join("*.txt").display().to_string()],
            output: Some(output),
            comparison: ComparatorArgs {
                locale: Some("en".to_string()),
                ..Default::default()
            },
            reverse: false,
            unique: false,
            parallel: false,
            format: None,
        }
    }

    #[test]
    fn test_sort_files_to_output() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.txt"), "track 10\ntrack 2\n").unwrap();
        fs::write(temp_dir.path().join("b.txt"), "Track 1\n").unwrap();
        let output = temp_dir.path().join("sorted.out");

        args(&temp_dir, output.clone()).execute().unwrap();
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "Track 1\ntrack 2\ntrack 10\n"
        );
    }

    #[test]
    fn test_unique_reverse_parallel() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("a.txt"),
            "v 1.0\nv 2\nV 1\nv 10\nv 01\n",
        )
        .unwrap();
        let output = temp_dir.path().join("sorted.out");

        let mut args = args(&temp_dir, output.clone());
        args.unique = true;
        args.reverse = true;
        args.parallel = true;
        args.execute().unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "v 10\nv 2\nv 1.0\n");
    }

    #[test]
    fn test_json_output_carries_positions() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.txt"), "x 20\nX 3\n").unwrap();
        let output = temp_dir.path().join("sorted.json");

        let mut args = args(&temp_dir, output.clone());
        args.format = Some(OutputFormat::Json);
        args.execute().unwrap();

        let parsed: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(parsed[0]["text"], "X 3");
        assert_eq!(parsed[0]["line"], 2);
        assert_eq!(parsed[0]["normalized"], "x 3");
        assert_eq!(parsed[1]["text"], "x 20");
    }

    #[test]
    fn test_missing_input() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("sorted.out");
        assert!(args(&temp_dir, output).execute().is_err());
    }
}
