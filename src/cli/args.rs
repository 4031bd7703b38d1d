//! Command-line tokenizing
//!
//! Builds a clap command from the option table and splits argv into
//! switches and positional arguments. Switches may appear anywhere among
//! the positionals; `--` ends switch processing.

use crate::{
    cli::options::{OptionId, OptionTable},
    error::{ClientError, Result},
};
use clap::{Arg, ArgAction, ArgMatches, ColorChoice, Command};
use tracing::{debug, instrument};

const POSITIONALS: &str = "args";

/// The switches and positionals found on the command line
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Tokens {
    /// Value-taking switches, in command-line order
    pub values: Vec<(OptionId, String)>,
    /// Flags that were given at least once
    pub flags: Vec<OptionId>,
    /// Non-option arguments, in command-line order
    pub positionals: Vec<String>,
}

/// Build the clap command describing the option table
pub fn build_command(program: &'static str, table: &OptionTable) -> Command {
    let command = Command::new(program)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .color(ColorChoice::Never)
        .arg(
            Arg::new(POSITIONALS)
                .num_args(0..)
                .action(ArgAction::Append),
        );

    table.iter().fold(command, |command, opt| {
        let mut arg = Arg::new(opt.long).long(opt.long);
        if let Some(short) = opt.short {
            arg = arg.short(short);
        }
        if opt.id == OptionId::Help {
            arg = arg.short_alias('?');
        }
        arg = if opt.takes_value {
            arg.num_args(1)
                .allow_hyphen_values(true)
                .action(ArgAction::Append)
        } else {
            arg.action(ArgAction::Count)
        };
        command.arg(arg)
    })
}

/// Split `argv` (program name first) into switches and positionals
#[instrument(skip(table, argv))]
pub fn tokenize(program: &'static str, table: &OptionTable, argv: &[String]) -> Result<Tokens> {
    let matches = build_command(program, table)
        .try_get_matches_from(argv)
        .map_err(|e| ClientError::usage(first_line(&e.to_string())))?;

    let mut indexed = Vec::new();
    let mut flags = Vec::new();
    for opt in matches.ids().filter_map(|id| table.by_long(id.as_str())) {
        if opt.takes_value {
            indexed.extend(values_with_indices(&matches, opt.long).map(|(i, v)| (i, opt.id, v)));
        } else if matches.get_count(opt.long) > 0 {
            flags.push(opt.id);
        }
    }
    indexed.sort_by_key(|(index, _, _)| *index);

    let positionals = matches
        .get_many::<String>(POSITIONALS)
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    let tokens = Tokens {
        values: indexed.into_iter().map(|(_, id, v)| (id, v)).collect(),
        flags,
        positionals,
    };
    debug!("Tokenized command line: {:?}", tokens);
    Ok(tokens)
}

fn values_with_indices<'a>(
    matches: &'a ArgMatches,
    id: &'static str,
) -> impl Iterator<Item = (usize, String)> + 'a {
    let indices = matches.indices_of(id).into_iter().flatten();
    let values = matches
        .get_many::<String>(id)
        .into_iter()
        .flatten()
        .cloned();
    indices.zip(values)
}

fn first_line(rendered: &str) -> String {
    let line = rendered.lines().next().unwrap_or_default();
    line.strip_prefix("error: ").unwrap_or(line).to_string()
}
