use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Create config.json file if it does not exist or is broken, then exit.
    #[arg(long)]
    pub create_config: bool,

    /// Path to the configuration file.
    #[arg(long, default_value = "config.json")]
    pub config: String,

    /// Skip loading the binary cache files on startup.
    #[arg(long)]
    pub skip_cache_load: bool,
}
