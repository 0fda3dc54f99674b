use crate::cli::HeatmapArgs;
use crate::config::{HeatmapConfig, PartialHeatmapConfig};
use crate::error::{CliError, Result};
use ddgmap::core::io::position_list::PositionListFile;
use ddgmap::workflows::heatmap::{PositionPartition, partition_by_energy_files};
use std::path::Path;
use std::process::Command;
use tempfile::NamedTempFile;
use tracing::{info, warn};

const DDG2HEATMAP: &str = "ddg2heatmap";

pub fn run(args: HeatmapArgs) -> Result<()> {
    let partial = match &args.config {
        Some(path) => PartialHeatmapConfig::from_file(path)?,
        None => PartialHeatmapConfig::default(),
    };
    let config = partial.merge_with_cli(&args)?;

    for input in [&config.pdb, &config.mutation_list, &config.position_list] {
        if !input.is_file() {
            return Err(CliError::InputNotFound {
                path: input.clone(),
            });
        }
    }
    if !config.data_directory.is_dir() {
        return Err(CliError::DataDirNotFound {
            path: config.data_directory.clone(),
        });
    }

    info!("Reading position list from {:?}", &config.position_list);
    let positions = PositionListFile::read_from_path(&config.position_list)?;

    let partition = partition_by_energy_files(&positions, &config.data_directory);
    report_partition(&partition);

    let filtered_list = write_filtered_list(&partition)?;

    let status = invoke_ddg2heatmap(&config, filtered_list.path())?;

    if config.keep_temp {
        let (_, kept_path) = filtered_list
            .keep()
            .map_err(|e| CliError::Io(e.error))?;
        println!("Filtered position list kept at: {}", kept_path.display());
    }

    if !status.success() {
        return Err(CliError::ExternalTool {
            tool: DDG2HEATMAP.to_string(),
            reason: format!("exited with {}", status),
        });
    }

    println!("✓ {} completed.", DDG2HEATMAP);
    if !partition.nothing_missing() {
        println!(
            "  Filtered out {} position(s) with missing energy files.",
            partition.missing.len()
        );
    }

    Ok(())
}

fn report_partition(partition: &PositionPartition) {
    if partition.nothing_missing() {
        info!(
            "All {} positions have energy files; no filtering needed.",
            partition.available.len()
        );
        return;
    }

    warn!(
        "Excluding {} residue(s) with missing energy files:",
        partition.missing.len()
    );
    for position in &partition.missing {
        warn!("  missing energy file for {}", position);
    }
}

fn write_filtered_list(partition: &PositionPartition) -> Result<NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .prefix("filtered_pos_")
        .suffix(".txt")
        .tempfile()?;
    PositionListFile::write_to(&partition.available, &mut file)?;
    file.as_file_mut().sync_all()?;
    Ok(file)
}

fn invoke_ddg2heatmap(config: &HeatmapConfig, filtered_list: &Path) -> Result<std::process::ExitStatus> {
    let mut command = Command::new(DDG2HEATMAP);
    command
        .arg("-p")
        .arg(&config.pdb)
        .arg("-d")
        .arg(&config.data_directory)
        .arg("-l")
        .arg(&config.mutation_list)
        .arg("-q")
        .arg(filtered_list)
        .arg("-o")
        .arg(&config.output)
        .args(&config.extra_args);

    info!("Running: {:?}", command);
    command.status().map_err(|e| CliError::ExternalTool {
        tool: DDG2HEATMAP.to_string(),
        reason: format!("failed to launch: {}", e),
    })
}
