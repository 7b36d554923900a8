use crate::cli::{Commands, HELP_TEMPLATE};
use crate::utils::DEFAULT_DATA_DIR;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = env!("CARGO_PKG_NAME"),
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    long_about = None
)]
#[command(
    after_help = HELP_TEMPLATE.replace("%BINARY_NAME%", env!("CARGO_PKG_NAME"))
)]
pub struct Cli {
    /// Directory holding `actordata` and `moviedata`.
    #[arg(
        long = "data-dir",
        value_name = "DIR",
        env = "SIX_DEGREES_DATA",
        default_value = DEFAULT_DATA_DIR,
        help = "Directory holding actordata and moviedata. A little-endian/ subdirectory is used if the files are not found directly inside it."
    )]
    pub data_dir: PathBuf,

    /// Look every name up in the mapped files, without memoizing results.
    #[arg(long = "no-cache")]
    pub no_cache: bool,

    #[command(subcommand)]
    pub command: Commands,
}
