//! Revision range parsing
//!
//! Accepts `N`, `N:`, `:N`, `N:M` where each endpoint is a revision number,
//! `head`/`h` in any letter case, or empty. Empty and head both mean the
//! youngest revision.

use crate::{
    config::{OptionState, Revision},
    error::{ClientError, Result},
};
use tracing::{debug, instrument};

/// Parse `arg` as a revision range and store it into `state`.
///
/// On error `state` is left untouched.
#[instrument(skip(state))]
pub fn apply_revision_range(state: &mut OptionState, arg: &str) -> Result<()> {
    let (start, end) = parse_revision_range(arg)?;
    debug!("Revision range {} -> ({}, {})", arg, start, end);
    state.start_revision = start;
    state.end_revision = end;
    Ok(())
}

/// Parse `arg` into a `(start, end)` pair
pub fn parse_revision_range(arg: &str) -> Result<(Revision, Revision)> {
    let syntax_error =
        || ClientError::argument_syntax(format!("Syntax error in revision argument \"{arg}\""));

    let (left, right) = match arg.split_once(':') {
        Some((_, rest)) if rest.contains(':') => return Err(syntax_error()),
        Some(halves) => halves,
        None => (arg, arg),
    };

    if !is_valid_endpoint(left) || !is_valid_endpoint(right) {
        return Err(syntax_error());
    }

    Ok((
        decode_endpoint(left).ok_or_else(syntax_error)?,
        decode_endpoint(right).ok_or_else(syntax_error)?,
    ))
}

/// All digits, `h`/`head` in any case, or empty
fn is_valid_endpoint(rev: &str) -> bool {
    if rev.bytes().all(|b| b.is_ascii_digit()) {
        return true;
    }
    rev.eq_ignore_ascii_case("h") || rev.eq_ignore_ascii_case("head")
}

fn decode_endpoint(rev: &str) -> Option<Revision> {
    if rev.is_empty() || rev.starts_with(['h', 'H']) {
        return Some(Revision::Head);
    }
    rev.parse().ok().map(Revision::Number)
}
