use crate::cli::{PositionsArgs, PositionsCommands};
use crate::error::{CliError, Result};
use ddgmap::core::io::mutinfo::MutinfoFile;
use ddgmap::core::io::position_list::PositionListFile;
use ddgmap::core::models::span::ResidueSpan;
use ddgmap::workflows::structure;
use std::path::Path;
use tracing::{debug, info, warn};

pub fn run(args: PositionsArgs) -> Result<()> {
    match args.command {
        PositionsCommands::Pdb { pdb, spans, output } => from_structure(&pdb, &spans, &output),
        PositionsCommands::Mutinfo { mutinfo, output } => from_mutinfo(&mutinfo, &output),
    }
}

fn from_mutinfo(mutinfo: &Path, output: &Path) -> Result<()> {
    if !mutinfo.is_file() {
        return Err(CliError::InputNotFound {
            path: mutinfo.to_path_buf(),
        });
    }

    info!("Reading mutinfo records from {:?}", mutinfo);
    let summary = MutinfoFile::read_from_path(mutinfo)?;

    for skipped in &summary.skipped {
        warn!(
            "Skipping unrecognised line {}: {} ({})",
            skipped.line, skipped.content, skipped.reason
        );
    }

    let identifiers = summary.identifiers();
    PositionListFile::write_to_path(&identifiers, output)?;

    println!(
        "✓ Wrote {} position(s) to: {}",
        identifiers.len(),
        output.display()
    );
    Ok(())
}

fn from_structure(pdb_path: &Path, span_args: &[String], output: &Path) -> Result<()> {
    if !pdb_path.is_file() {
        return Err(CliError::InputNotFound {
            path: pdb_path.to_path_buf(),
        });
    }

    let spans = span_args
        .iter()
        .map(|s| s.parse::<ResidueSpan>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| CliError::Argument(e.to_string()))?;

    info!("Loading structure from {:?}", pdb_path);
    let (pdb, diagnostics) =
        pdbtbx::open(pdb_path.to_string_lossy().as_ref()).map_err(|errors| {
            CliError::FileParsing {
                path: pdb_path.to_path_buf(),
                source: anyhow::anyhow!(
                    errors
                        .iter()
                        .map(|e| e.to_string())
                        .collect::<Vec<_>>()
                        .join("\n")
                ),
            }
        })?;
    for diagnostic in &diagnostics {
        debug!("Structure parser: {}", diagnostic);
    }

    let report = structure::extract_positions(&pdb, &spans);

    let identifiers: Vec<String> = report.positions.iter().map(|p| p.identifier()).collect();
    PositionListFile::write_to_path(&identifiers, output)?;

    println!(
        "✓ Wrote {} position(s) to: {}",
        identifiers.len(),
        output.display()
    );
    Ok(())
}
