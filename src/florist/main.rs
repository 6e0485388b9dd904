use clap::Parser;
use directories::ProjectDirs;
use florist::api::ShopApi;
use florist::config::ShopConfig;
use florist::error::{Result, ShopError};
use florist::store::fs::FileStore;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::args::Cli;
use cli::input::{Prompter, StdinSource};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut api = init_api(&cli)?;
    let stdin = io::stdin();
    let mut prompt = Prompter::new(StdinSource::new(stdin.lock()), io::stdout());

    match cli::menu::run_menu(&mut api, &mut prompt) {
        Err(ShopError::InputClosed) => {
            if api.has_unsaved_changes() {
                tracing::warn!("input closed with unsaved changes; they were not saved");
            }
            Ok(())
        }
        other => other,
    }
}

/// Logs go to stderr so they never interleave with the menu. `RUST_LOG`
/// wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}

fn init_api(cli: &Cli) -> Result<ShopApi<FileStore>> {
    let data_dir = cli.data_dir.clone().unwrap_or_else(default_data_dir);
    let config = ShopConfig::load(&data_dir)?;
    tracing::debug!("using data directory {}", data_dir.display());

    let store = FileStore::new(data_dir).with_config(&config);
    Ok(ShopApi::new(store))
}

fn default_data_dir() -> PathBuf {
    ProjectDirs::from("com", "florist", "florist")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("data"))
}
