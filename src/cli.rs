use clap::Parser;
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_FILE;

/// Render HTML configuration forms from a plugin manifest
#[derive(Parser, Debug, Clone)]
#[command(name = "manifest-gui", version, about, long_about = None)]
pub struct Cli {
    /// Path to the manifest JSON file
    #[arg(short, long, env = "MANIFEST_GUI_MANIFEST")]
    pub manifest: PathBuf,

    /// Path to the settings file
    #[arg(short, long, env = "MANIFEST_GUI_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Id of the element rows are appended to
    #[arg(long, env = "MANIFEST_GUI_CONTAINER_ID")]
    pub container_id: Option<String>,

    /// Class shared by every generated input
    #[arg(long, env = "MANIFEST_GUI_INPUT_CLASS")]
    pub input_class: Option<String>,

    /// Write the defaults mapping to this file instead of stdout
    #[arg(long, env = "MANIFEST_GUI_DEFAULTS_OUT")]
    pub defaults_out: Option<PathBuf>,

    /// Print only the container element instead of the whole table
    #[arg(long)]
    pub fragment: bool,
}
