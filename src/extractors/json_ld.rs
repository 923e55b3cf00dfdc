use crate::config::ScraperConfig;
use crate::error::{Result, ScrapeError};
use crate::fetchers::RequestFetcher;
use log::debug;
use scraper::{Html, Selector};
use serde_json::Value;

const JSON_LD_SELECTOR: &str = "script[type='application/ld+json']";

/// Locates the JSON-LD block that carries a page's recipe.
pub struct MetadataExtractor {
    fetcher: RequestFetcher,
}

impl MetadataExtractor {
    pub fn new(config: &ScraperConfig) -> Result<Self> {
        Ok(Self {
            fetcher: RequestFetcher::new(config)?,
        })
    }

    /// Fetch `url` and return the text of every JSON-LD script node in
    /// document order.
    pub async fn locate_metadata_nodes(&self, url: &str) -> Result<Vec<String>> {
        debug!("MetadataExtractor: fetching {}", url);
        let html = self.fetcher.fetch(url).await?;
        metadata_nodes_from_html(&html)
    }

    /// Pick the first recipe object out of the located nodes.
    ///
    /// Nodes are visited in order. A node that is not valid JSON is skipped.
    /// Within a node the candidates are, in order: the elements of a
    /// top-level array, or else the payload itself followed by the entries
    /// of its `@graph` array. The first candidate passing [`is_recipe`] wins.
    pub fn select_recipe_block<S: AsRef<str>>(nodes: &[S]) -> Result<Value> {
        for (index, node) in nodes.iter().enumerate() {
            let payload = match serde_json::from_str::<Value>(node.as_ref()) {
                Ok(payload) => payload,
                Err(e) => {
                    debug!("MetadataExtractor: skipping malformed JSON-LD {}: {}", index, e);
                    continue;
                }
            };

            if let Some(recipe) = recipe_candidates(&payload).find(|c| is_recipe(c)) {
                debug!("MetadataExtractor: recipe found in JSON-LD {}", index);
                return Ok(recipe.clone());
            }
            debug!("MetadataExtractor: no recipe in JSON-LD {}", index);
        }

        Err(ScrapeError::NoRecipeFound)
    }
}

/// Extract the text of every JSON-LD script node in an HTML document.
///
/// Fails with [`ScrapeError::NoMetadata`] when there are none.
pub fn metadata_nodes_from_html(html: &str) -> Result<Vec<String>> {
    let selector =
        Selector::parse(JSON_LD_SELECTOR).map_err(|e| ScrapeError::SelectorError(e.to_string()))?;
    let document = Html::parse_document(html);

    let nodes: Vec<String> = document
        .select(&selector)
        .map(|script| script.text().collect())
        .collect();
    debug!("MetadataExtractor: found {} JSON-LD script tags", nodes.len());

    if nodes.is_empty() {
        return Err(ScrapeError::NoMetadata);
    }
    Ok(nodes)
}

fn recipe_candidates(payload: &Value) -> Box<dyn Iterator<Item = &Value> + '_> {
    match payload {
        Value::Array(items) => Box::new(items.iter()),
        _ => {
            let graph = payload
                .get("@graph")
                .and_then(Value::as_array)
                .into_iter()
                .flatten();
            Box::new(std::iter::once(payload).chain(graph))
        }
    }
}

/// True when the object's `@type` mentions "recipe", ignoring case.
///
/// Array types are joined with `,` first, so `["Recipe", "NewsArticle"]`
/// matches as well.
pub fn is_recipe(value: &Value) -> bool {
    value
        .get("@type")
        .and_then(type_label)
        .is_some_and(|label| label.to_lowercase().contains("recipe"))
}

fn type_label(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => Some(
            items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(","),
        ),
        _ => None,
    }
}
