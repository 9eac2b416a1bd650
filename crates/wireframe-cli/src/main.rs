//! Command-line entry point.

use clap::Parser;
use wireframe_cli::{CliArgs, CliConfig, run};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Starting wireframe converter");

    let config = CliConfig::from(CliArgs::parse());
    let mut stdout = std::io::stdout().lock();
    let report = run(&config, &mut stdout)?;

    if report.has_failures() {
        log::warn!(
            "{} node(s) failed and {} root(s) were skipped",
            report.traversal.failures.len(),
            report.rejected_roots.len()
        );
    }
    Ok(())
}
