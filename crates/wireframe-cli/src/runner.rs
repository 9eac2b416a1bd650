//! Headless conversion of a document on disk.

use crate::config::CliConfig;
use anyhow::{Context, Result, anyhow, bail};
use std::fs;
use std::io::Write;
use wireframe_core::{
    ConversionReport, MemoryHost, SceneDocument, SessionController, SessionOutcome,
};

/// Load the input document, convert the selection and write every message
/// posted to the UI to `out` as one JSON object per line.
///
/// With `print`, the converted document follows the messages.
pub fn run<W: Write>(config: &CliConfig, out: &mut W) -> Result<ConversionReport> {
    let json = fs::read_to_string(&config.input)
        .with_context(|| format!("Failed to read {}", config.input.display()))?;
    let document = SceneDocument::from_json(&json)
        .with_context(|| format!("Failed to parse {}", config.input.display()))?;
    log::info!(
        "Loaded '{}' with {} nodes",
        document.name,
        document.nodes.len()
    );

    let selection = if config.select.is_empty() {
        document.roots.clone()
    } else {
        config
            .select
            .iter()
            .map(|name| {
                document
                    .find_by_name(name)
                    .ok_or_else(|| anyhow!("No node named '{}'", name))
            })
            .collect::<Result<Vec<_>>>()?
    };

    let host = MemoryHost::new(document).with_selection(selection);
    let mut session = SessionController::with_config(host, config.session);
    let SessionOutcome::Converted(report) = session.handle_message(config.request.clone()) else {
        bail!("Request did not start a conversion");
    };

    let host = session.into_host();
    for message in host.messages() {
        writeln!(out, "{}", message.to_json()?)?;
    }

    for failure in &report.traversal.failures {
        log::warn!("{} ({}): {}", failure.name, failure.id, failure.error);
    }

    let document = host.into_document();
    if config.print || config.output.is_some() {
        let converted = document.to_json()?;
        if config.print {
            writeln!(out, "{}", converted)?;
        }
        if let Some(path) = &config.output {
            fs::write(path, &converted)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Wrote {}", path.display());
        }
    }

    Ok(report)
}
