use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "florist", version)]
#[command(about = "Stock and order book for a flower shop", long_about = None)]
pub struct Cli {
    /// Directory holding the data files and config.json
    #[arg(short, long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long)]
    pub verbose: bool,
}
