use anyhow::Result;
use std::process::ExitCode;
use svn_cli::{
    backend::RequestPrinter,
    cli::{CommandRegistry, Dispatcher, OptionTable},
    setup_logging,
};

fn main() -> Result<ExitCode> {
    setup_logging()?;

    let registry = CommandRegistry::builtin()?;
    let dispatcher = Dispatcher::new("svn", &registry, OptionTable::builtin());
    let argv: Vec<String> = std::env::args().collect();

    // Failures are reported by the dispatcher; only the status is left to set
    let status = dispatcher.run(
        &argv,
        &RequestPrinter::new(),
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    );

    Ok(if status.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
