mod collect;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "shopcat-cli")]
#[command(about = "Extract Shopify storefront catalogs into a flat CSV file")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch every configured store and append its rows to the CSV output
    Collect {
        /// Restrict the run to a configured store (repeatable)
        #[arg(long = "store", value_name = "DOMAIN")]
        stores: Vec<String>,

        /// Write to this CSV file instead of `SHOPCAT_OUTPUT_PATH`
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// List the stores that would be fetched without making requests
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the configured store list
    Stores,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = shopcat_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let stores_file = shopcat_core::load_stores(&config.stores_path)?;

    match cli.command {
        Some(Commands::Collect {
            stores,
            output,
            dry_run,
        }) => {
            collect::run_collect(&config, &stores_file.stores, &stores, output, dry_run).await?;
        }
        Some(Commands::Stores) => {
            for store in &stores_file.stores {
                println!("{store}");
            }
        }
        None => {
            collect::run_collect(&config, &stores_file.stores, &[], None, false).await?;
        }
    }

    Ok(())
}
