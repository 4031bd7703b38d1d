//! Per-invocation configuration
//!
//! `OptionState` collects every decoded switch. It is built once per run,
//! filled in by the scanner and then handed read-only to one handler.

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::fmt;
use std::path::PathBuf;

/// One endpoint of a revision range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Revision {
    /// The youngest revision in the repository
    Head,
    /// A concrete revision number
    Number(u64),
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Head => f.write_str("HEAD"),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

/// Decoded command-line switches
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionState {
    /// Commit/log message (`--message`)
    pub message: Option<String>,
    /// Lower end of the revision range
    pub start_revision: Revision,
    /// Upper end of the revision range
    pub end_revision: Revision,
    /// Lower end of the date range
    pub start_date: Option<DateTime<Utc>>,
    /// Upper end of the date range
    pub end_date: Option<DateTime<Utc>>,
    /// Print extra information
    pub verbose: bool,
    /// Print maximum information
    pub very_verbose: bool,
    /// Display update information
    pub show_updates: bool,
    /// Help was requested
    pub help: bool,
    /// Version information was requested
    pub version: bool,
    /// Print as little as possible
    pub quiet: bool,
    /// Force the operation to run
    pub force: bool,
    /// Descend recursively
    pub recursive: bool,
    /// Operate on a single directory only
    pub nonrecursive: bool,
    /// Directory to put results in (`--destination`)
    pub target: Option<PathBuf>,
    /// Contents of the `--filedata` file
    #[serde(serialize_with = "serialize_blob")]
    pub filedata: Option<Vec<u8>>,
    /// XML file to read from or write to
    pub xml_file: Option<PathBuf>,
    /// Authentication user name
    pub username: Option<String>,
    /// Authentication password
    #[serde(skip_serializing)]
    pub password: Option<String>,
    /// Options passed through to the external diff program
    pub extensions: Option<String>,
}

impl Default for OptionState {
    fn default() -> Self {
        Self {
            message: None,
            start_revision: Revision::Head,
            end_revision: Revision::Number(1),
            start_date: None,
            end_date: None,
            verbose: false,
            very_verbose: false,
            show_updates: false,
            help: false,
            version: false,
            quiet: false,
            force: false,
            recursive: false,
            nonrecursive: false,
            target: None,
            filedata: None,
            xml_file: None,
            username: None,
            password: None,
            extensions: None,
        }
    }
}

impl OptionState {
    /// Create the initial state for a run
    pub fn new() -> Self {
        Self::default()
    }
}

fn serialize_blob<S: Serializer>(blob: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error> {
    match blob {
        Some(bytes) => serializer.serialize_some(&String::from_utf8_lossy(bytes)),
        None => serializer.serialize_none(),
    }
}
