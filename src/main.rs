use clap::Parser;
use log::debug;
use recipe_scraper::{scrape_recipe_with_config, ScraperConfig};
use std::process::ExitCode;

/// Extract the schema.org recipe from a web page and print it as JSON
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// URL of the recipe page
    url: String,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    let config = ScraperConfig::load()?;
    debug!("Loaded config: {:?}", config);

    let recipe = scrape_recipe_with_config(&args.url, &config).await?;
    let output = if args.pretty {
        serde_json::to_string_pretty(&recipe)?
    } else {
        serde_json::to_string(&recipe)?
    };
    Ok(output)
}
