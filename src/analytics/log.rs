//! Append-only query log with full re-parse on every access.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{GaragistError, Result};

const QUERY_DELIMITER: &str = " | Query: ";
const PREDICTED_DELIMITER: &str = " | Predicted: ";
const CONFIDENCE_DELIMITER: &str = " | Confidence: ";

/// One logged query/prediction/confidence tuple.
///
/// The line format does not escape embedded delimiter sequences or
/// double quotes; a query containing them corrupts that line's parse.
/// Known limitation, kept for format compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryLogEntry {
    /// ISO-8601 timestamp of the request.
    pub timestamp: String,
    /// Raw user query text.
    pub query: String,
    /// Predicted service title, or the "Need More Info" sentinel.
    pub prediction: String,
    /// Surfaced confidence in `[0, 1]`, stored at 4 decimal places.
    pub confidence: f64,
}

impl QueryLogEntry {
    /// Create an entry stamped with the current time.
    pub fn new(query: &str, prediction: &str, confidence: f64) -> Self {
        QueryLogEntry {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            query: query.to_string(),
            prediction: prediction.to_string(),
            confidence,
        }
    }

    /// Serialize to the single-line log format.
    fn to_line(&self) -> String {
        format!(
            "{}{}\"{}\"{}\"{}\"{}{:.4}",
            self.timestamp,
            QUERY_DELIMITER,
            self.query,
            PREDICTED_DELIMITER,
            self.prediction,
            CONFIDENCE_DELIMITER,
            self.confidence
        )
    }

    /// Parse one log line; inverse of [`QueryLogEntry::to_line`].
    fn parse_line(line: &str) -> Option<Self> {
        let (timestamp, rest) = line.split_once(QUERY_DELIMITER)?;
        let (query, rest) = rest.split_once(PREDICTED_DELIMITER)?;
        let (prediction, confidence) = rest.split_once(CONFIDENCE_DELIMITER)?;

        let query = query.strip_prefix('"')?.strip_suffix('"')?;
        let prediction = prediction.strip_prefix('"')?.strip_suffix('"')?;
        let confidence: f64 = confidence.trim().parse().ok()?;

        Some(QueryLogEntry {
            timestamp: timestamp.to_string(),
            query: query.to_string(),
            prediction: prediction.to_string(),
            confidence,
        })
    }
}

/// Append-only query log backed by a single UTF-8 text file.
///
/// Both `record` and `read_all` re-parse the entire file; nothing is
/// cached in memory between calls.
#[derive(Debug, Clone)]
pub struct QueryLog {
    path: PathBuf,
}

impl QueryLog {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        QueryLog { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry and return the full re-parsed history.
    pub fn record(&self, entry: &QueryLogEntry) -> Result<Vec<QueryLogEntry>> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                GaragistError::log(format!("Failed to open {}: {e}", self.path.display()))
            })?;
        writeln!(file, "{}", entry.to_line())?;

        self.read_all()
    }

    /// Re-parse the entire log, oldest entry first.
    ///
    /// A log file that does not exist yet reads as empty history. Lines
    /// that fail to parse are skipped so one corrupt line cannot poison
    /// the rest.
    pub fn read_all(&self) -> Result<Vec<QueryLogEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            GaragistError::log(format!("Failed to read {}: {e}", self.path.display()))
        })?;

        let mut entries = Vec::new();
        for line in content.lines() {
            if line.trim().is_empty() {
                continue;
            }
            match QueryLogEntry::parse_line(line) {
                Some(entry) => entries.push(entry),
                None => warn!(line, "skipping unparseable query log line"),
            }
        }

        Ok(entries)
    }
}
