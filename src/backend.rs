//! Default operations backend
//!
//! The front end does not perform version-control work itself. This
//! backend hands each resolved request on as a JSON document on stdout,
//! ready for whatever engine consumes it.

use crate::{
    cli::{Invocation, Operations, Subcommand},
    config::OptionState,
    error::{ClientError, Result},
};
use serde::Serialize;
use std::io::Write;
use tracing::{debug, instrument};

/// A resolved request as handed to the engine
#[derive(Debug, Serialize)]
pub struct Request<'a> {
    pub command: Subcommand,
    pub targets: &'a [String],
    pub options: &'a OptionState,
}

impl<'a> Request<'a> {
    pub fn from_invocation(inv: &'a Invocation<'a>) -> Self {
        Self {
            command: inv.command,
            targets: inv.targets,
            options: inv.options,
        }
    }
}

/// Writes every request to the output stream as pretty-printed JSON
#[derive(Debug, Default, Clone, Copy)]
pub struct RequestPrinter;

impl RequestPrinter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Operations for RequestPrinter {
    #[instrument(skip_all, fields(command = ?inv.command))]
    fn run(&self, inv: &Invocation<'_>, out: &mut dyn Write) -> Result<()> {
        let request = Request::from_invocation(inv);
        debug!("Emitting request for {} target(s)", request.targets.len());

        serde_json::to_writer_pretty(&mut *out, &request)
            .map_err(|e| ClientError::handler_with_source("Unable to encode request", e))?;
        writeln!(out).map_err(|e| ClientError::handler_with_source("Unable to write request", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Revision, utils::session::Session};

    #[test]
    fn test_request_is_printed_as_json() {
        let session = Session::acquire().unwrap();
        let options = OptionState {
            message: Some("initial import".to_string()),
            end_revision: Revision::Head,
            password: Some("hunter2".to_string()),
            ..OptionState::default()
        };
        let targets = vec!["trunk".to_string()];
        let inv = Invocation {
            command: Subcommand::Import,
            options: &options,
            targets: &targets,
            session: &session,
        };

        let mut out = Vec::new();
        RequestPrinter::new().run(&inv, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["command"], "import");
        assert_eq!(value["targets"][0], "trunk");
        assert_eq!(value["options"]["message"], "initial import");
        assert_eq!(value["options"]["start_revision"], "head");
        assert_eq!(value["options"]["end_revision"], "head");
        assert!(value["options"].get("password").is_none());
    }
}
