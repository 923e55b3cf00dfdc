pub mod config;
pub mod error;
pub mod extractors;
pub mod fetchers;
pub mod model;
pub mod normalizer;

use log::debug;

pub use config::ScraperConfig;
pub use error::{Result, ScrapeError};
pub use extractors::MetadataExtractor;
pub use model::Recipe;
pub use normalizer::RecipeNormalizer;

/// Fetch `url` and extract its recipe using default configuration.
///
/// # Example
/// ```no_run
/// # async fn run() -> recipe_scraper::Result<()> {
/// let recipe = recipe_scraper::scrape_recipe("https://example.com/bellini").await?;
/// println!("{} serves {:?}", recipe.name, recipe.servings);
/// # Ok(())
/// # }
/// ```
pub async fn scrape_recipe(url: &str) -> Result<Recipe> {
    scrape_recipe_with_config(url, &ScraperConfig::default()).await
}

/// Fetch `url` and extract its recipe.
pub async fn scrape_recipe_with_config(url: &str, config: &ScraperConfig) -> Result<Recipe> {
    let extractor = MetadataExtractor::new(config)?;
    let nodes = extractor.locate_metadata_nodes(url).await?;
    recipe_from_nodes(&nodes, url)
}

/// Extract the recipe from an already fetched HTML document.
pub fn recipe_from_html(html: &str, url: &str) -> Result<Recipe> {
    let nodes = extractors::metadata_nodes_from_html(html)?;
    recipe_from_nodes(&nodes, url)
}

fn recipe_from_nodes(nodes: &[String], url: &str) -> Result<Recipe> {
    let raw = MetadataExtractor::select_recipe_block(nodes)?;
    let recipe = RecipeNormalizer::normalize(&raw, url)?;
    debug!("{:#?}", recipe);
    Ok(recipe)
}
