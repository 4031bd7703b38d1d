//! The subcommand table
//!
//! Canonical commands are followed directly by their aliases. The table is
//! checked for that ordering once, when the registry is built.

use crate::{
    cli::options::OptionId::{self, *},
    error::{ClientError, Result},
};
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

/// Operations the client can dispatch to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Subcommand {
    Add,
    Checkout,
    Cleanup,
    Commit,
    Copy,
    Delete,
    Diff,
    Help,
    Import,
    Log,
    Mkdir,
    Move,
    Propdel,
    Propedit,
    Propget,
    Proplist,
    Propset,
    Revert,
    Status,
    Switch,
    Update,
}

/// One row of the command table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDescriptor {
    pub name: &'static str,
    pub is_alias: bool,
    /// Operation to run, `None` for aliases
    pub handler: Option<Subcommand>,
    /// Usage text, `None` for aliases
    pub help: Option<&'static str>,
    /// Switches listed in detailed help
    pub options: &'static [OptionId],
}

impl CommandDescriptor {
    pub const fn command(
        name: &'static str,
        handler: Subcommand,
        help: &'static str,
        options: &'static [OptionId],
    ) -> Self {
        Self {
            name,
            is_alias: false,
            handler: Some(handler),
            help: Some(help),
            options,
        }
    }

    pub const fn alias(name: &'static str) -> Self {
        Self {
            name,
            is_alias: true,
            handler: None,
            help: None,
            options: &[],
        }
    }
}

/// Ordered, validated command table
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    entries: Vec<CommandDescriptor>,
}

impl CommandRegistry {
    /// Build a registry, checking that every alias trails its canonical entry
    pub fn new(entries: Vec<CommandDescriptor>) -> Result<Self> {
        let mut seen = HashSet::new();
        for (i, entry) in entries.iter().enumerate() {
            if entry.name.is_empty() {
                return Err(ClientError::registry(format!("entry {i} has no name")));
            }
            if !seen.insert(entry.name) {
                return Err(ClientError::registry(format!(
                    "duplicate command name '{}'",
                    entry.name
                )));
            }
            match (entry.is_alias, entry.handler, entry.help) {
                (true, None, None) if i > 0 => {}
                (true, None, None) => {
                    return Err(ClientError::registry(format!(
                        "alias '{}' has no preceding command",
                        entry.name
                    )));
                }
                (true, _, _) => {
                    return Err(ClientError::registry(format!(
                        "alias '{}' must not carry a handler or help text",
                        entry.name
                    )));
                }
                (false, Some(_), Some(_)) => {}
                (false, _, _) => {
                    return Err(ClientError::registry(format!(
                        "command '{}' needs a handler and help text",
                        entry.name
                    )));
                }
            }
        }
        debug!("Command registry holds {} entries", entries.len());
        Ok(Self { entries })
    }

    /// The client's command table
    pub fn builtin() -> Result<Self> {
        Self::new(builtin_entries())
    }

    /// Exact-match lookup over commands and aliases
    pub fn lookup(&self, name: &str) -> Option<&CommandDescriptor> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// The canonical entry owning `desc`
    pub fn canonicalize<'a>(&'a self, desc: &'a CommandDescriptor) -> &'a CommandDescriptor {
        match self.position(desc) {
            Some(index) => self.entries[..=index]
                .iter()
                .rev()
                .find(|entry| !entry.is_alias)
                .unwrap_or(desc),
            None => desc,
        }
    }

    /// Look `name` up and canonicalize the result
    pub fn resolve(&self, name: Option<&str>) -> Option<&CommandDescriptor> {
        let desc = self.lookup(name?)?;
        Some(self.canonicalize(desc))
    }

    /// Names of the aliases trailing `desc`
    pub fn aliases<'a>(
        &'a self,
        desc: &CommandDescriptor,
    ) -> impl Iterator<Item = &'static str> + use<'a> {
        let start = self.position(desc).map_or(self.entries.len(), |i| i + 1);
        self.entries[start..]
            .iter()
            .take_while(|entry| entry.is_alias)
            .map(|entry| entry.name)
    }

    /// Canonical entries in table order
    pub fn canonical_commands(&self) -> impl Iterator<Item = &CommandDescriptor> {
        self.entries.iter().filter(|entry| !entry.is_alias)
    }

    pub fn entries(&self) -> &[CommandDescriptor] {
        &self.entries
    }

    fn position(&self, desc: &CommandDescriptor) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| std::ptr::eq(entry, desc))
            .or_else(|| self.entries.iter().position(|entry| entry.name == desc.name))
    }
}

fn builtin_entries() -> Vec<CommandDescriptor> {
    use CommandDescriptor as C;

    vec![
        C::command(
            "add",
            Subcommand::Add,
            "Add new files and directories to version control.\n\
             usage: add [TARGETS]\n",
            &[Revision],
        ),
        C::alias("ad"),
        C::alias("new"),
        C::command(
            "checkout",
            Subcommand::Checkout,
            "Check out a working directory from a repository.\n\
             usage: checkout REPOS_URL1 [REPOS_URL2 REPOS_URL3...]\n",
            &[Username, Password, XmlFile, Destination, Quiet, NonRecursive, Date, Revision],
        ),
        C::alias("co"),
        C::command(
            "cleanup",
            Subcommand::Cleanup,
            "Recursively clean up the working copy, removing locks, resuming\n\
             unfinished operations, etc.\n\
             usage: cleanup [TARGETS]\n",
            &[],
        ),
        C::command(
            "commit",
            Subcommand::Commit,
            "Commit changes from your working copy to the repository.\n\
             usage: commit [TARGETS]\n",
            &[FileData, Message, Username, Password, XmlFile, Quiet, Revision],
        ),
        C::alias("ci"),
        C::command(
            "copy",
            Subcommand::Copy,
            "Duplicate something in your working copy, remembering history.\n\
             usage: copy SRC_PATH DST_PATH.\n",
            &[FileData, Message, Revision, Username, Password],
        ),
        C::alias("cp"),
        C::command(
            "delete",
            Subcommand::Delete,
            "Remove files and directories from version control.\n\
             usage: delete [TARGET]\n       \
             delete REPOS_URL1 [[REPOS_URL2] ... ]\n",
            &[FileData, Message, Username, Password, Force],
        ),
        C::alias("del"),
        C::alias("remove"),
        C::alias("rm"),
        C::command(
            "diff",
            Subcommand::Diff,
            "Display local changes in the working copy, or changes between the\n\
             working copy and the repository if a revision is given.\n\
             usage: diff [-r REV] [TARGETS]\n",
            &[Username, Password, Extensions, Revision, Destination, NonRecursive],
        ),
        C::alias("di"),
        C::command(
            "help",
            Subcommand::Help,
            "Display this usage message.\n\
             usage: help [SUBCOMMAND1 [SUBCOMMAND2] ...]\n",
            &[Version],
        ),
        C::alias("?"),
        C::alias("h"),
        C::command(
            "import",
            Subcommand::Import,
            "Import a file or tree into the repository.\n\
             usage: import REPOS_URL [PATH] [NEW_ENTRY_IN_REPOS] \n",
            &[FileData, Message, Username, Password, XmlFile, Quiet, Revision],
        ),
        C::command(
            "log",
            Subcommand::Log,
            "Show the log messages for a set of revision(s) and/or file(s).\n\
             usage: log [-r REV1[:REV2]] [PATH1 [PATH2] ...] \n",
            &[Username, Password, Revision, Verbose],
        ),
        C::command(
            "mkdir",
            Subcommand::Mkdir,
            "Create a new directory under revision control.\n\
             usage: mkdir [NEW_DIR | REPOS_URL].\n",
            &[Username, Password, Message, FileData],
        ),
        C::command(
            "move",
            Subcommand::Move,
            "Move or rename something in working copy.\n\
             usage: move SRC_PATH DST_PATH.\n",
            &[Username, Password, Message, FileData, Revision],
        ),
        C::alias("mv"),
        C::alias("rename"),
        C::alias("ren"),
        C::command(
            "propdel",
            Subcommand::Propdel,
            "Remove property PROPNAME on files and directories.\n\
             usage: propdel PROPNAME [TARGETS]\n",
            &[Quiet, Recursive],
        ),
        C::alias("pdel"),
        C::command(
            "propedit",
            Subcommand::Propedit,
            "Edit property PROPNAME with $EDITOR on files and directories.\n\
             usage: propedit PROPNAME [TARGETS]\n",
            &[],
        ),
        C::alias("pedit"),
        C::alias("pe"),
        C::command(
            "propget",
            Subcommand::Propget,
            "Get the value of property PROPNAME on files and directories.\n\
             usage: propget PROPNAME [TARGETS]\n",
            &[Recursive],
        ),
        C::alias("pget"),
        C::alias("pg"),
        C::command(
            "proplist",
            Subcommand::Proplist,
            "List all properties for given files and directories.\n\
             usage: proplist [TARGETS]\n",
            &[Recursive],
        ),
        C::alias("plist"),
        C::alias("pl"),
        C::command(
            "propset",
            Subcommand::Propset,
            "Set property PROPNAME to PROPVAL on files and directories.\n\
             usage: propset PROPNAME [PROPVAL | -F/--filedata VALFILE] [TARGETS]\n",
            &[FileData, Quiet, Recursive],
        ),
        C::alias("pset"),
        C::alias("ps"),
        C::command(
            "revert",
            Subcommand::Revert,
            "Restore pristine working copy file (undo all local edits)\n\
             usage: revert [TARGETS]\n",
            &[Recursive],
        ),
        C::command(
            "status",
            Subcommand::Status,
            "Print the status of working copy files and directories.\n\
             usage: status [TARGETS]\n",
            &[Username, Password, ShowUpdates, NonRecursive, Verbose, Quiet],
        ),
        C::alias("stat"),
        C::alias("st"),
        C::command(
            "switch",
            Subcommand::Switch,
            "Update existing working copy files and directories to become\n\
             a working copy of a different repository URL.\n\
             usage: switch [TARGET] REPOS_URL\n",
            &[],
        ),
        C::alias("sw"),
        C::command(
            "update",
            Subcommand::Update,
            "Bring changes from the repository into the working copy.\n\
             usage: update [TARGETS]\n",
            &[Username, Password, Revision, Date, NonRecursive, XmlFile],
        ),
        C::alias("up"),
    ]
}
