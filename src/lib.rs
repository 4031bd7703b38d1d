//! # svn command-line front end
//!
//! Decides from raw process arguments which version-control operation was
//! requested, resolves command aliases, decodes switches into an
//! [`config::OptionState`] and parses the revision and date range grammars.
//! The operations themselves sit behind the [`cli::Operations`] trait.
//!
//! ## Example
//!
//! ```no_run
//! use svn_cli::{backend::RequestPrinter, cli::{CommandRegistry, Dispatcher, OptionTable}};
//!
//! let registry = CommandRegistry::builtin()?;
//! let dispatcher = Dispatcher::new("svn", &registry, OptionTable::builtin());
//! let argv: Vec<String> = std::env::args().collect();
//! let result = dispatcher.run(
//!     &argv,
//!     &RequestPrinter::new(),
//!     &mut std::io::stdout(),
//!     &mut std::io::stderr(),
//! );
//! # let _ = result;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod backend;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "SVN_LOG";

/// Initialize logging on stderr, filtered by `SVN_LOG` (default `warn`)
pub fn setup_logging() -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
