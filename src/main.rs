use clap::Parser;

use linkdeck::config::StaticConfig;
use linkdeck::system::logging::init_logging;

#[derive(Parser, Debug)]
#[command(name = "linkdeck", version, about)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Override the API base URL for this run
    #[arg(long)]
    base_url: Option<String>,

    /// Print a sample configuration file and exit
    #[arg(long)]
    generate_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    if args.generate_config {
        print!("{}", StaticConfig::generate_sample_config());
        return Ok(());
    }

    let mut config = StaticConfig::load(args.config.as_deref());
    if let Some(base_url) = args.base_url {
        config.api.base_url = base_url;
    }
    config
        .validate()
        .map_err(|e| anyhow::anyhow!(e.format_simple()))?;

    // Guard must live until exit so buffered log writes are flushed.
    let _guard = init_logging(&config.logging);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting linkdeck");

    if let Err(e) = linkdeck::tui::run_tui(config).await {
        anyhow::bail!("terminal session failed: {}", e);
    }

    Ok(())
}
