use std::fs;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use idf_commands::{CommandTemplates, generate};
use idf_ingest::read_identities;

use crate::cli::MapArgs;
use crate::types::MapResult;

/// Run the `map` subcommand: read the identity file, generate the mapping
/// commands, and write them out.
pub fn run_map(args: &MapArgs) -> Result<MapResult> {
    let span = info_span!("map", registry = %args.registry_id);
    let _guard = span.enter();

    let identities = read_identities(&args.identity_file).with_context(|| {
        format!("read identity file {}", args.identity_file.display())
    })?;
    info!(records = identities.len(), "identity file loaded");

    let templates = CommandTemplates::racf();
    let batch = generate(&identities, &args.registry_id, &templates)
        .context("generate identity mapping commands")?;

    // The trailing refresh command is not per-record.
    let mapped = batch.commands.len() - 1;

    if args.dry_run {
        info!(mapped, "dry run: no commands written");
    } else {
        let mut text = batch.commands.join("\n");
        text.push('\n');
        match &args.output {
            Some(path) => {
                fs::write(path, &text)
                    .with_context(|| format!("write output file {}", path.display()))?;
                info!(path = %path.display(), commands = batch.commands.len(), "commands written");
            }
            None => print!("{text}"),
        }
    }

    Ok(MapResult {
        registry: args.registry_id.clone(),
        records: identities.len(),
        mapped,
        rejections: batch.rejections,
        status: batch.status,
        output: if args.dry_run {
            None
        } else {
            args.output.clone()
        },
        dry_run: args.dry_run,
    })
}

/// Run the `template` subcommand: print the command templates in use.
pub fn run_template() {
    let templates = CommandTemplates::racf();
    println!("Identity mapping command template:");
    println!("  {}", templates.command);
    println!();
    println!("Refresh command:");
    println!("  {}", templates.refresh);
}
