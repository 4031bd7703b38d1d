//! Command dispatch
//!
//! Scans options, picks the subcommand, applies the log-message guard and
//! hands the resolved request to exactly one handler.

use crate::{
    cli::{
        commands::{CommandRegistry, Subcommand},
        help::HelpRenderer,
        options::OptionTable,
        scanner::OptionScanner,
    },
    config::OptionState,
    error::{ClientError, Result},
    utils::{fs, session::Session},
};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Everything a handler gets to see
#[derive(Debug)]
pub struct Invocation<'a> {
    pub command: Subcommand,
    pub options: &'a OptionState,
    /// Positional arguments after the subcommand name
    pub targets: &'a [String],
    pub session: &'a Session,
}

/// The version-control operations behind the front end
pub trait Operations {
    /// Run `inv.command`, writing user-facing output to `out`
    fn run(&self, inv: &Invocation<'_>, out: &mut dyn Write) -> Result<()>;

    /// Whether `path` is under version control
    fn is_versioned(&self, path: &Path) -> bool {
        fs::is_versioned(path)
    }
}

/// Orchestrates one run of the client
#[derive(Debug)]
pub struct Dispatcher<'a> {
    program: &'static str,
    registry: &'a CommandRegistry,
    options: OptionTable,
}

impl<'a> Dispatcher<'a> {
    #[must_use]
    pub const fn new(
        program: &'static str,
        registry: &'a CommandRegistry,
        options: OptionTable,
    ) -> Self {
        Self {
            program,
            registry,
            options,
        }
    }

    fn help(&self) -> HelpRenderer<'_> {
        HelpRenderer::new(self.program, self.registry, &self.options)
    }

    /// Run the client for `argv` (program name first).
    ///
    /// Every failure is reported on `err` (or `out` for usage text) before
    /// it is returned; the session is released on every path.
    #[instrument(skip_all)]
    pub fn run(
        &self,
        argv: &[String],
        ops: &dyn Operations,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Result<()> {
        let session = Session::acquire().inspect_err(|e| self.report(e, err))?;
        let result = self.dispatch(argv, &session, ops, out, err);
        drop(session);
        result
    }

    fn dispatch(
        &self,
        argv: &[String],
        session: &Session,
        ops: &dyn Operations,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Result<()> {
        if argv.len() <= 1 {
            self.print_generic_help(out);
            return Err(ClientError::NoArguments);
        }

        let mut state = OptionState::new();
        let scanner = OptionScanner::new(self.program, self.options);
        let mut diagnostics = Vec::new();
        let scanned = scanner.scan(argv, &mut state, &mut diagnostics);
        for diagnostic in &diagnostics {
            self.report(diagnostic, err);
        }
        let outcome = scanned.map_err(|e| self.fail(e, out, err))?;

        let mut positionals = outcome.positionals.iter();
        let name = if state.help {
            "help"
        } else {
            match positionals.next() {
                Some(name) => name.as_str(),
                None => return Err(self.fail(ClientError::MissingSubcommand, out, err)),
            }
        };
        let Some(desc) = self.registry.resolve(Some(name)) else {
            return Err(self.fail(ClientError::unknown_command(name), out, err));
        };
        let Some(command) = desc.handler else {
            let e = ClientError::registry(format!("'{}' has no handler", desc.name));
            self.report(&e, err);
            return Err(e);
        };

        let log_message_versioned = outcome
            .filedata_paths
            .iter()
            .any(|path| ops.is_versioned(path));
        if log_message_versioned && !state.force {
            let e = ClientError::LogMessageIsVersionedFile;
            self.report(&e, err);
            return Err(e);
        }

        let targets: Vec<String> = positionals.cloned().collect();
        let inv = Invocation {
            command,
            options: &state,
            targets: &targets,
            session,
        };
        info!("Running '{}' with {} target(s)", desc.name, targets.len());

        let result = match command {
            Subcommand::Help => self
                .help()
                .run(&state, &targets, out, err)
                .map_err(|e| ClientError::handler_with_source("Unable to write help", e)),
            _ => ops.run(&inv, out),
        };
        if let Err(e) = &result {
            if !e.is_argument_syntax() {
                self.report(e, err);
            }
        }
        result
    }

    /// Report `e` and, when it calls for it, the generic usage text
    fn fail(&self, e: ClientError, out: &mut dyn Write, err: &mut dyn Write) -> ClientError {
        self.report(&e, err);
        if e.wants_usage() {
            self.print_generic_help(out);
        }
        e
    }

    fn report(&self, e: &ClientError, err: &mut dyn Write) {
        debug!("Reporting error: {:?}", e);
        if let Err(write_err) = writeln!(err, "{}: {}", self.program, e) {
            debug!("Unable to write error report: {}", write_err);
        }
    }

    fn print_generic_help(&self, out: &mut dyn Write) {
        if let Err(write_err) = out.write_all(self.help().generic_help().as_bytes()) {
            debug!("Unable to write usage: {}", write_err);
        }
    }
}
