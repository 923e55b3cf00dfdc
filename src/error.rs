use thiserror::Error;

/// Errors that can occur while scraping a recipe from a web page
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Failed to fetch the source page
    #[error("Failed to fetch URL: {0}")]
    FetchError(#[from] reqwest::Error),

    /// The page carries no JSON-LD script blocks at all
    #[error("The linked page contains no metadata")]
    NoMetadata,

    /// JSON-LD is present but none of it describes a recipe
    #[error("Unable to extract Recipe metadata from provided url")]
    NoRecipeFound,

    /// An instruction entry is neither a string nor an object with `text`
    #[error("Unable to parse recipe steps: unexpected entry {0}")]
    UnparsableStep(String),

    /// An ingredient entry is not a string
    #[error("Unable to parse recipe ingredients: unexpected entry {0}")]
    UnparsableIngredient(String),

    /// A field the canonical recipe cannot do without is missing
    #[error("Recipe metadata is missing required field `{0}`")]
    RequiredFieldMissing(&'static str),

    /// CSS selector could not be built
    #[error("Selector error: {0}")]
    SelectorError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
