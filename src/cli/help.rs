//! Help output
//!
//! Renders the command table and option descriptions, and implements the
//! built-in `help` command.

use crate::{
    cli::{
        commands::{CommandDescriptor, CommandRegistry},
        options::{OptionDefinition, OptionTable},
    },
    config::OptionState,
};
use std::fmt::Write as _;
use std::io::{self, Write};

const USAGE: &str = "\
Type \"{program} help <subcommand>\" for help on a specific subcommand.

Most subcommands take file and/or directory arguments, recursing
on the directories.  If no arguments are supplied to such a
command, it will recurse on the current directory (inclusive) by
default.

Available subcommands:
";

const INFO: &str = "\
Subversion is a tool for revision control.
For additional information, see http://subversion.tigris.org
";

/// Formats registry and option data for humans
#[derive(Debug, Clone, Copy)]
pub struct HelpRenderer<'a> {
    program: &'static str,
    registry: &'a CommandRegistry,
    options: &'a OptionTable,
}

impl<'a> HelpRenderer<'a> {
    #[must_use]
    pub const fn new(
        program: &'static str,
        registry: &'a CommandRegistry,
        options: &'a OptionTable,
    ) -> Self {
        Self {
            program,
            registry,
            options,
        }
    }

    /// Name and aliases of `desc`; with `detailed`, also its help text and switches
    pub fn command_info(&self, desc: &CommandDescriptor, detailed: bool) -> String {
        let canonical = self.registry.canonicalize(desc);
        let mut text = canonical.name.to_string();

        let aliases: Vec<_> = self.registry.aliases(canonical).collect();
        if !aliases.is_empty() {
            let _ = write!(text, " ({})", aliases.join(", "));
        }

        if detailed {
            let _ = writeln!(text, ": {}", canonical.help.unwrap_or_default());
            for opt in canonical.options.iter().filter_map(|id| self.options.get(*id)) {
                text.push_str(&option_line(opt));
            }
            text.push('\n');
        }
        text
    }

    /// Usage preamble, every canonical command and the closing blurb
    pub fn generic_help(&self) -> String {
        let mut text = format!("usage: {} <subcommand> [options] [args]\n", self.program);
        text.push_str(&USAGE.replace("{program}", self.program));
        for desc in self.registry.canonical_commands() {
            let _ = writeln!(text, "   {}", self.command_info(desc, false));
        }
        let _ = write!(text, "\n{INFO}\n");
        text
    }

    /// Detailed help for `name`, or `None` if no such command exists
    pub fn subcommand_help(&self, name: &str) -> Option<String> {
        self.registry
            .resolve(Some(name))
            .map(|desc| self.command_info(desc, true))
    }

    /// Banner printed for `--version`
    pub fn version_banner(&self) -> String {
        format!(
            "{}, version {}\n   compiled from {} {}\n\n{INFO}",
            self.program,
            env!("CARGO_PKG_VERSION"),
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
        )
    }

    /// The `help` command: version, generic help, or help per named command
    pub fn run(
        &self,
        state: &OptionState,
        targets: &[String],
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> io::Result<()> {
        if state.version {
            return out.write_all(self.version_banner().as_bytes());
        }
        if targets.is_empty() {
            return out.write_all(self.generic_help().as_bytes());
        }
        for name in targets {
            match self.subcommand_help(name) {
                Some(text) => out.write_all(text.as_bytes())?,
                None => write!(err, "\"{name}\": unknown command.\n\n")?,
            }
        }
        Ok(())
    }
}

fn option_line(opt: &OptionDefinition) -> String {
    let mut line = format!("  --{}", opt.long);
    if let Some(short) = opt.short {
        let _ = write!(line, " (-{short})");
    }
    let _ = writeln!(line, ":  {}", opt.description);
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_renderer<T>(f: impl FnOnce(HelpRenderer<'_>) -> T) -> T {
        let registry = CommandRegistry::builtin().unwrap();
        let options = OptionTable::builtin();
        f(HelpRenderer::new("svn", &registry, &options))
    }

    #[test]
    fn test_short_form_lists_aliases() {
        with_renderer(|help| {
            let delete = help.registry.lookup("rm").unwrap();
            assert_eq!(help.command_info(delete, false), "delete (del, remove, rm)");
            let log = help.registry.lookup("log").unwrap();
            assert_eq!(help.command_info(log, false), "log");
        });
    }

    #[test]
    fn test_detailed_form_lists_options() {
        with_renderer(|help| {
            let text = help.subcommand_help("ci").unwrap();
            assert!(text.starts_with(
                "commit (ci): Commit changes from your working copy to the repository.\n"
            ));
            assert!(text.contains("  --filedata (-F):  read data from specified file\n"));
            assert!(text.contains("  --username:  specify a username [optional]\n"));
            assert!(text.ends_with("\n\n"));
        });
    }

    #[test]
    fn test_options_follow_registry_order() {
        with_renderer(|help| {
            let text = help.subcommand_help("log").unwrap();
            let user = text.find("--username").unwrap();
            let rev = text.find("--revision").unwrap();
            let verbose = text.find("--verbose").unwrap();
            assert!(user < rev && rev < verbose);
        });
    }

    #[test]
    fn test_generic_help_lists_canonical_commands_only() {
        with_renderer(|help| {
            let text = help.generic_help();
            assert!(text.starts_with("usage: svn <subcommand> [options] [args]\n"));
            assert!(text.contains("   add (ad, new)\n"));
            assert!(text.contains("   help (?, h)\n"));
            assert!(text.contains("   update (up)\n"));
            assert!(!text.contains("   rm\n"));
            assert!(text.contains("Subversion is a tool for revision control."));
        });
    }

    #[test]
    fn test_unknown_subcommand_help() {
        with_renderer(|help| {
            let mut out = Vec::new();
            let mut err = Vec::new();
            let targets = vec!["status".to_string(), "bogus".to_string()];
            help.run(&OptionState::new(), &targets, &mut out, &mut err).unwrap();
            let out = String::from_utf8(out).unwrap();
            assert!(out.starts_with("status (stat, st): "));
            assert_eq!(String::from_utf8(err).unwrap(), "\"bogus\": unknown command.\n\n");
        });
    }

    #[test]
    fn test_version_banner() {
        with_renderer(|help| {
            let state = OptionState {
                version: true,
                help: true,
                ..OptionState::default()
            };
            let mut out = Vec::new();
            help.run(&state, &[], &mut out, &mut Vec::new()).unwrap();
            let out = String::from_utf8(out).unwrap();
            assert!(out.starts_with(&format!("svn, version {}", env!("CARGO_PKG_VERSION"))));
        });
    }
}
