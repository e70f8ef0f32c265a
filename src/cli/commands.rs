use anyhow::{anyhow, Context};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::Level;

use crate::cli::args::{Cli, Commands};
use crate::processors::{aggregate, CatalogBuilder};
use crate::settings::RunConfig;
use crate::utils::constants::{DEFAULT_INPUT_DIR, RUN_CONFIG_FILE};
use crate::writers::OverwritePolicy;

pub fn run(cli: Cli) -> anyhow::Result<()> {
    init_logging(cli.verbose, cli.log_file.as_deref())?;

    match cli.command {
        Commands::Build {
            base_dir,
            input_dir,
            config,
            overwrite_item_config,
            emit_items,
        } => {
            let input_dir = resolve_input_dir(&base_dir, input_dir);
            let config_path = config.unwrap_or_else(|| base_dir.join(RUN_CONFIG_FILE));

            let run_config = RunConfig::load(&config_path).with_context(|| {
                format!(
                    "Failed to load run configuration from {}",
                    config_path.display()
                )
            })?;

            println!("Building STAC catalog '{}'...", run_config.id);
            println!("Input directory: {}", input_dir.display());

            let policy = if overwrite_item_config {
                OverwritePolicy::Overwrite
            } else {
                OverwritePolicy::Skip
            };

            let builder = CatalogBuilder::new(&base_dir, run_config)
                .with_item_config_policy(policy)
                .with_emit_items(emit_items)
                .with_progress(!cli.quiet);

            let summary = builder
                .build(&input_dir)
                .with_context(|| format!("Catalog build from {} failed", input_dir.display()))?;

            println!("\n{}", summary.summary());
            println!("Catalog complete!");
        }

        Commands::Inspect {
            base_dir,
            input_dir,
        } => {
            let input_dir = resolve_input_dir(&base_dir, input_dir);
            println!("Inspecting {}", input_dir.display());

            let builder = CatalogBuilder::new(&base_dir, RunConfig::default());
            let inspected = builder
                .inspect(&input_dir)
                .with_context(|| format!("Inspection of {} failed", input_dir.display()))?;

            for (i, file) in inspected.iter().enumerate() {
                println!(
                    "{}. {} ({}): bbox={}, {}",
                    i + 1,
                    file.source.file_name()?,
                    file.source.format(),
                    file.bbox,
                    file.time_range
                );
            }

            let boxes: Vec<_> = inspected.iter().map(|f| f.bbox).collect();
            let ranges: Vec<_> = inspected.iter().map(|f| f.time_range).collect();
            let extent = aggregate(&boxes, &ranges, &input_dir)?;
            println!("\n{}", extent.summary());
        }
    }

    Ok(())
}

fn resolve_input_dir(base_dir: &Path, input_dir: Option<PathBuf>) -> PathBuf {
    input_dir.unwrap_or_else(|| base_dir.join(DEFAULT_INPUT_DIR))
}

fn init_logging(verbose: bool, log_file: Option<&Path>) -> anyhow::Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false);

    let result = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    result.map_err(|e| anyhow!("Failed to initialise logging: {}", e))
}
