//! Command-line interface module
//!
//! Option table, command table, scanning, help and dispatch.

pub mod args;
pub mod commands;
pub mod dispatch;
pub mod help;
pub mod options;
pub mod scanner;

pub use commands::{CommandDescriptor, CommandRegistry, Subcommand};
pub use dispatch::{Dispatcher, Invocation, Operations};
pub use help::HelpRenderer;
pub use options::{OptionDefinition, OptionId, OptionTable};
pub use scanner::{OptionScanner, ScanOutcome};
