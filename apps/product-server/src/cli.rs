//! Command line arguments

use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "product-server", version, about = "Product catalog demo server")]
pub struct Cli {
    /// Directory holding application.yaml and application-<profile>.yaml
    #[arg(long = "config", value_name = "DIR", default_value = "config")]
    pub config_dir: PathBuf,

    /// Configuration profile layered over application.yaml
    #[arg(long, env = "PRODUCT_PROFILE")]
    pub profile: Option<String>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    pub print_config: bool,
}
