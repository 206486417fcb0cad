use bento_core::layout::plan_rows;
use bento_core::{RawInput, Result};
use bento_inference::Config;
use bento_scrappers::{init_logging, ScraperManager};
use bento_web::{AppState, Pipeline};
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[arg(long, default_value = "memory", help = "Result store backend. Available: memory")]
    storage: String,
    #[arg(long, help = "Model provider: kimi (default) or dummy. Overrides BENTO_MODEL")]
    model: Option<String>,
    #[arg(long, help = "Chat completion base URL. Overrides KIMI_BASE_URL")]
    base_url: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API
    Serve {
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },
    /// Turn text (or an article link) into a bento grid and print it as JSON
    Process {
        content: String,
        /// Treat the content as a link to extract first
        #[arg(long)]
        url: bool,
    },
    /// Extract an article without calling the model
    Scrape {
        url: String,
        /// Force a scraper by CLI name (e.g. wechat) instead of matching the domain
        #[arg(long)]
        source: Option<String>,
    },
    /// List available scrapers
    List,
}

fn load_config(cli: &Cli) -> Config {
    let mut config = Config::from_env();
    if let Some(model) = &cli.model {
        config.model_name = Some(model.clone());
    }
    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.clone();
    }
    config
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config = load_config(&cli);
    let scrapers = Arc::new(ScraperManager::new());

    match cli.command {
        Commands::Serve { addr } => {
            let store = bento_storage::create_storage(&cli.storage).await?;
            info!("💾 Result store initialized (using {})", cli.storage);
            let pipeline = Pipeline::from_config(scrapers, &config);
            bento_web::serve(addr, AppState::new(pipeline, store)).await?;
        }
        Commands::Process { content, url } => {
            let pipeline = Pipeline::from_config(scrapers, &config);
            let input = if url {
                RawInput::url(content)
            } else {
                RawInput::text(content)
            };
            let result = pipeline.process(input).await?;
            let sections = result.sections.as_ref().map_or(0, Vec::len);
            info!("🍱 {} sections, grid rows {:?}", sections, plan_rows(sections));
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::Scrape { url, source } => {
            let article = match source {
                Some(name) => scrapers.get_scraper(&name)?.scrape_article(&url).await?,
                None => scrapers.scrape_url(&url).await?,
            };
            println!("{}", serde_json::to_string_pretty(&article)?);
        }
        Commands::List => {
            println!("Available scrapers:");
            for source in scrapers.list_scrapers() {
                println!("  {} {} ({})", source.emoji, source.name, source.domain);
            }
        }
    }

    Ok(())
}
