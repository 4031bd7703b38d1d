//! Date range parsing
//!
//! Accepts `X`, `X:`, `:X`, `X:Y`. A bare date sets both ends; with a
//! separator only the non-empty halves are assigned.

use crate::{
    config::OptionState,
    error::{ClientError, Result},
};
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use tracing::{debug, instrument};

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y%m%d", "%m/%d/%Y"];
const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H%M%S", "%Y%m%dT%H%M%S"];

/// Parse `arg` as a date range and store it into `state`.
///
/// Nothing is assigned unless every non-empty half parses.
#[instrument(skip(state))]
pub fn apply_date_range(state: &mut OptionState, arg: &str) -> Result<()> {
    let syntax_error = || ClientError::argument_syntax(format!("Unable to parse \"{arg}\""));
    let parse = |text: &str| parse_date(text, Utc::now()).ok_or_else(syntax_error);

    match arg.split_once(':') {
        Some((_, rest)) if rest.contains(':') => Err(syntax_error()),
        Some((left, right)) => {
            let start = (!left.is_empty()).then(|| parse(left)).transpose()?;
            let end = (!right.is_empty()).then(|| parse(right)).transpose()?;
            if start.is_some() {
                state.start_date = start;
            }
            if end.is_some() {
                state.end_date = end;
            }
            debug!("Date range {} -> ({:?}, {:?})", arg, state.start_date, state.end_date);
            Ok(())
        }
        None => {
            let date = parse(arg)?;
            state.start_date = Some(date);
            state.end_date = Some(date);
            debug!("Date {} -> {}", arg, date);
            Ok(())
        }
    }
}

/// Parse a single date expression relative to `now`.
///
/// Calendar dates are taken as midnight UTC.
pub fn parse_date(text: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let text = text.trim();
    let midnight = |date: NaiveDate| date.and_time(NaiveTime::MIN).and_utc();

    match text.to_ascii_lowercase().as_str() {
        "now" => return Some(now),
        "today" => return Some(midnight(now.date_naive())),
        "yesterday" => return Some(midnight(now.date_naive()) - Duration::days(1)),
        _ => {}
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .map(midnight)
        .or_else(|| {
            DATE_TIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
                .map(|dt| dt.and_utc())
        })
}
