//! Option scanning
//!
//! Decodes the tokenized command line into an `OptionState`. Every
//! recognized switch is accepted whatever subcommand follows.

use crate::{
    cli::{
        args::tokenize,
        options::{OptionId, OptionTable},
    },
    config::OptionState,
    core::{date::apply_date_range, revision::apply_revision_range},
    error::{ClientError, Result},
    utils::{fs::read_file, locale::set_locale},
};
use std::path::PathBuf;
use tracing::{debug, instrument};

/// What the scan leaves behind besides the decoded switches
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Non-option arguments; the first one names the subcommand
    pub positionals: Vec<String>,
    /// Files read through `--filedata`
    pub filedata_paths: Vec<PathBuf>,
}

/// Single pass decoder from argv to `OptionState`
#[derive(Debug, Clone, Copy)]
pub struct OptionScanner {
    program: &'static str,
    table: OptionTable,
}

impl OptionScanner {
    #[must_use]
    pub const fn new(program: &'static str, table: OptionTable) -> Self {
        Self { program, table }
    }

    /// Scan `argv` (program name first) into `state`.
    ///
    /// Problems that do not stop the scan are pushed onto `diagnostics`,
    /// which keeps them even when a later switch fails.
    #[instrument(skip(self, argv, state, diagnostics))]
    pub fn scan(
        &self,
        argv: &[String],
        state: &mut OptionState,
        diagnostics: &mut Vec<ClientError>,
    ) -> Result<ScanOutcome> {
        let tokens = tokenize(self.program, &self.table, argv)?;
        let mut outcome = ScanOutcome {
            positionals: tokens.positionals,
            ..ScanOutcome::default()
        };

        for id in tokens.flags {
            apply_flag(state, id);
        }
        for (id, value) in tokens.values {
            self.apply_value(state, id, value, &mut outcome, diagnostics)?;
        }

        debug!(
            "Scan finished with {} positional argument(s)",
            outcome.positionals.len()
        );
        Ok(outcome)
    }

    fn apply_value(
        &self,
        state: &mut OptionState,
        id: OptionId,
        value: String,
        outcome: &mut ScanOutcome,
        diagnostics: &mut Vec<ClientError>,
    ) -> Result<()> {
        match id {
            OptionId::Message => state.message = Some(value),
            OptionId::Revision => apply_revision_range(state, &value)?,
            OptionId::Date => apply_date_range(state, &value)?,
            OptionId::FileData => {
                let path = PathBuf::from(value);
                state.filedata = Some(read_file(&path)?);
                outcome.filedata_paths.push(path);
            }
            OptionId::XmlFile => state.xml_file = Some(PathBuf::from(value)),
            OptionId::Destination => state.target = Some(PathBuf::from(value)),
            OptionId::Username => state.username = Some(value),
            OptionId::Password => state.password = Some(value),
            OptionId::Extensions => state.extensions = Some(value),
            OptionId::Locale => {
                if let Err(e) = set_locale(&value) {
                    debug!("Continuing after locale failure: {}", e);
                    diagnostics.push(e);
                }
            }
            other => debug!("Ignoring value for {:?}", other),
        }
        Ok(())
    }
}

fn apply_flag(state: &mut OptionState, id: OptionId) {
    match id {
        OptionId::Verbose => state.verbose = true,
        OptionId::VeryVerbose => state.very_verbose = true,
        OptionId::ShowUpdates => state.show_updates = true,
        OptionId::Help => state.help = true,
        OptionId::Quiet => state.quiet = true,
        OptionId::Force => state.force = true,
        OptionId::Recursive => state.recursive = true,
        OptionId::NonRecursive => state.nonrecursive = true,
        OptionId::Version => {
            state.version = true;
            state.help = true;
        }
        other => debug!("Ignoring flag {:?}", other),
    }
}
