use crate::cli::HeatmapArgs;
use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Defaults for the `heatmap` command, loadable from a TOML file.
///
/// Every field is optional; values given on the command line win over the
/// file. Required values missing from both sides are a configuration error.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct PartialHeatmapConfig {
    pub pdb: Option<PathBuf>,
    pub data_directory: Option<PathBuf>,
    pub mutation_list: Option<PathBuf>,
    pub position_list: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub extra_args: Option<Vec<String>>,
}

/// The fully resolved `heatmap` invocation.
#[derive(Debug, Clone)]
pub struct HeatmapConfig {
    pub pdb: PathBuf,
    pub data_directory: PathBuf,
    pub mutation_list: PathBuf,
    pub position_list: PathBuf,
    pub output: PathBuf,
    pub extra_args: Vec<String>,
    pub keep_temp: bool,
}

impl PartialHeatmapConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn merge_with_cli(self, args: &HeatmapArgs) -> Result<HeatmapConfig> {
        let require = |cli_value: &Option<PathBuf>, file_value: Option<PathBuf>, key: &str| {
            cli_value.clone().or(file_value).ok_or_else(|| {
                CliError::Config(format!(
                    "A value for '{}' is required either in the config file or via CLI argument.",
                    key
                ))
            })
        };

        let pdb = require(&args.pdb, self.pdb, "pdb")?;
        let data_directory = require(&args.data_directory, self.data_directory, "data-directory")?;
        let mutation_list = require(&args.mutation_list, self.mutation_list, "mutation-list")?;
        let position_list = require(&args.position_list, self.position_list, "position-list")?;

        let output = args
            .output
            .clone()
            .or(self.output)
            .unwrap_or_else(|| PathBuf::from("heatmap.pdf"));

        // CLI pass-through arguments replace, not extend, the configured ones.
        let extra_args = if args.extra.is_empty() {
            self.extra_args.unwrap_or_default()
        } else {
            args.extra.clone()
        };

        Ok(HeatmapConfig {
            pdb,
            data_directory,
            mutation_list,
            position_list,
            output,
            extra_args,
            keep_temp: args.keep_temp,
        })
    }
}
