//! File pattern resolution using glob

use anyhow::Result;
use glob::glob;
use std::path::PathBuf;

use crate::error::CliError;

/// Resolve file patterns to actual file paths
///
/// Files are returned in the order their patterns were given; matches of
/// a single pattern are sorted and duplicates are dropped.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths = glob(pattern).map_err(|e| CliError::InvalidPattern(format!("{pattern}: {e}")))?;

        let mut matched: Vec<PathBuf> = Vec::new();
        for path_result in paths {
            let path = path_result.map_err(|e| CliError::FileNotFound(e.to_string()))?;
            if path.is_file() {
                matched.push(path);
            }
        }

        if matched.is_empty() {
            return Err(CliError::FileNotFound(pattern.clone()).into());
        }

        matched.sort();
        for path in matched {
            if !files.contains(&path) {
                files.push(path);
            }
        }
    }

    log::debug!("Resolved {} input files", files.len());
    Ok(files)
}
