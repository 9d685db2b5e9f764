use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stayfee")]
#[command(version, about = "Pack-based stay fee calculator with late-night surcharge")]
pub struct Cli {
    /// Entry time, "YYYY-MM-DD HH:MM:SS" in local wall-clock time
    #[arg(long, value_name = "DATETIME")]
    pub enter: Option<String>,

    /// Exit time, "YYYY-MM-DD HH:MM:SS" in local wall-clock time
    #[arg(long, value_name = "DATETIME")]
    pub leave: Option<String>,

    /// Pack to bill against (1h, 3h, 5h, 8h)
    #[arg(short, long, value_name = "PACK")]
    pub pack: Option<String>,

    /// Load billing rate overrides from a TOML file
    #[arg(long, value_name = "PATH")]
    pub rates: Option<PathBuf>,

    /// Print the bill as JSON instead of labeled lines
    #[arg(long)]
    pub json: bool,

    /// List the available packs
    #[arg(long = "list-packs")]
    pub list_packs: bool,

    /// Run the built-in demonstration scenarios
    #[arg(long)]
    pub demo: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
