use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stac-organizer")]
#[command(about = "Organise NetCDF and CSV climate data into a STAC catalog layout")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Hide the progress bar")]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Relocate input files into the catalog tree and write collection metadata
    Build {
        #[arg(short, long, default_value = ".", help = "Directory the collection is created in")]
        base_dir: PathBuf,

        #[arg(
            short,
            long,
            help = "Directory holding the source files [default: <base-dir>/appdata]"
        )]
        input_dir: Option<PathBuf>,

        #[arg(
            short,
            long,
            help = "Run configuration file [default: <base-dir>/catalog_config.yaml]"
        )]
        config: Option<PathBuf>,

        #[arg(long, help = "Replace existing item_config.json files")]
        overwrite_item_config: bool,

        #[arg(long, help = "Also write one STAC item per file to metadata/items")]
        emit_items: bool,
    },

    /// Report per-file and collection extents without writing anything
    Inspect {
        #[arg(short, long, default_value = ".")]
        base_dir: PathBuf,

        #[arg(
            short,
            long,
            help = "Directory holding the source files [default: <base-dir>/appdata]"
        )]
        input_dir: Option<PathBuf>,
    },
}
