use std::path::PathBuf;

use clap::Parser;

use rc_transient::{run_rc_app, Language, RcAppConfig};

/// Transient response of an RC discharge circuit
#[derive(Parser)]
#[command(name = "rc-transient", version)]
struct Cli {
    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Language of the UI and the CSV header (en, pt)
    #[arg(long)]
    lang: Option<Language>,

    /// File where the last submitted parameters are remembered
    #[arg(long)]
    state: Option<PathBuf>,
}

fn main() -> eframe::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut config = RcAppConfig::load_or_default(cli.config.as_deref());
    if let Some(lang) = cli.lang {
        config.language = lang;
    }
    run_rc_app(config, cli.state)
}
