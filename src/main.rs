//! Expenseweb main entry point

use clap::Parser;
use expenseweb_api::start_server;
use expenseweb_config::{Config, ConfigError};
use expenseweb_core::{ExpenseController, RestExpenseGateway, SubmitRules};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Runtime;

#[derive(Parser, Debug)]
#[command(name = "expenseweb")]
#[command(author = "Expenseweb Contributors")]
#[command(version = "0.1.0")]
#[command(about = "A single-page expense tracker over a remote REST API", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Override api.base_url
    #[arg(long)]
    api_url: Option<String>,

    /// Override server.port
    #[arg(short, long)]
    port: Option<u16>,

    /// Print the effective configuration and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let (mut config, missing_file) = match Config::load(&args.config) {
        Ok(config) => (config, false),
        Err(ConfigError::FileNotFound { .. }) => (Config::default(), true),
        Err(e) => {
            let hint = e.hint();
            return Err(anyhow::Error::new(e)
                .context(format!("Failed to load {}", args.config.display()))
                .context(hint));
        }
    };

    let overridden = args.api_url.is_some() || args.port.is_some();
    if let Some(url) = args.api_url {
        config.api.base_url = url;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Err(e) = config.validate() {
        let hint = e.hint();
        return Err(anyhow::Error::new(e).context("Invalid configuration").context(hint));
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.logging.level))
        .init();

    if missing_file {
        log::warn!("Config file {} not found, using defaults", args.config.display());
    }

    if args.print_config {
        print!("{}", config.listing(missing_file && !overridden)?);
        return Ok(());
    }

    let gateway = RestExpenseGateway::from_config(&config)?;
    let controller = ExpenseController::new(Arc::new(gateway), SubmitRules::from(&config.form));

    let rt = Runtime::new()?;
    rt.block_on(start_server(config, Arc::new(controller)))?;

    Ok(())
}
