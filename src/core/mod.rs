//! Range grammars
//!
//! Parsers for the `X`, `X:`, `:X`, `X:Y` forms taken by `--revision` and
//! `--date`.

pub mod date;
pub mod revision;

pub use date::{apply_date_range, parse_date};
pub use revision::{apply_revision_range, parse_revision_range};
