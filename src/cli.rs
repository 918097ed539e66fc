use clap::Parser;
use std::path::PathBuf;

/// Tile series indexer and movie player for screening image datasets
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Dataset JSON file (tile grid dimensions + image references)
    #[arg(value_name = "DATASET")]
    pub dataset: PathBuf,

    /// Play the frames as a movie after listing them
    #[arg(short = 'a', long = "play")]
    pub play: bool,

    /// Minimum delay between autoplay frames, overrides settings
    #[arg(short = 'd', long = "delay", value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Seek to this frame (0-based) before playing
    #[arg(long = "frame", value_name = "N")]
    pub start_frame: Option<usize>,

    /// Write the effective player settings to the config directory
    #[arg(long = "save-settings")]
    pub save_settings: bool,

    /// Enable logging to file (default: tileplay.log in the data directory)
    #[arg(short = 'l', long = "log", value_name = "LOG_FILE")]
    pub log_file: Option<Option<PathBuf>>,

    /// Increase logging verbosity (default: warn, -v: info, -vv: debug, -vvv+: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,

    /// Custom configuration directory (overrides default platform paths)
    #[arg(short = 'c', long = "config-dir", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,
}
