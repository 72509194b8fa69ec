//! Command-line argument parsing

use clap::Parser;

use super::DEFAULT_CONFIG_PATH;

#[derive(Debug, Parser)]
#[command(name = "linkshort", version, about = "URL shortener service")]
pub struct Args {
    /// Path to the TOML configuration file
    #[arg(short = 'c', long = "config", default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    /// Write a sample configuration file to the given path and exit
    #[arg(long = "generate-config", value_name = "PATH")]
    pub generate_config: Option<String>,
}
