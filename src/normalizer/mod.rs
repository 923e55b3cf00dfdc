//! Field transforms from a raw schema.org `Recipe` object to [`Recipe`].
//!
//! Every transform is a pure function of one raw field. Structural problems
//! (missing name, unreadable steps) abort the whole normalization; anything
//! else that cannot be interpreted leaves the optional field empty.

pub mod duration;
pub mod nutrition;
pub mod servings;

use crate::error::{Result, ScrapeError};
use crate::model::Recipe;
use serde_json::{Map, Number, Value};

pub use duration::parse_duration;
pub use nutrition::parse_nutrition;
pub use servings::{parse_servings, Servings};

/// Borrowed view of the shapes a JSON-LD field shows up in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape<'a> {
    /// Missing key or explicit `null`
    Absent,
    Text(&'a str),
    Number(&'a Number),
    Flag(bool),
    Sequence(&'a [Value]),
    Mapping(&'a Map<String, Value>),
}

impl<'a> From<&'a Value> for Shape<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Null => Shape::Absent,
            Value::Bool(b) => Shape::Flag(*b),
            Value::Number(n) => Shape::Number(n),
            Value::String(s) => Shape::Text(s),
            Value::Array(items) => Shape::Sequence(items),
            Value::Object(map) => Shape::Mapping(map),
        }
    }
}

impl<'a> From<Option<&'a Value>> for Shape<'a> {
    fn from(value: Option<&'a Value>) -> Self {
        value.map_or(Shape::Absent, Shape::from)
    }
}

pub struct RecipeNormalizer;

impl RecipeNormalizer {
    /// Map a raw recipe object found on `url` into a [`Recipe`].
    pub fn normalize(raw: &Value, url: &str) -> Result<Recipe> {
        let Servings {
            servings,
            servings_size,
        } = parse_servings(raw.get("recipeYield"));

        Ok(Recipe {
            url: url.to_string(),
            name: parse_name(raw.get("name"))?,
            ingredients: parse_ingredients(raw.get("recipeIngredient"))?,
            steps: parse_steps(raw.get("recipeInstructions"))?,
            image_url: parse_image_url(raw.get("image")),
            prep_time: parse_duration(raw.get("prepTime")),
            cook_time: parse_duration(raw.get("cookTime")),
            total_time: parse_duration(raw.get("totalTime")),
            servings,
            servings_size,
            nutrition: parse_nutrition(raw.get("nutrition")),
        })
    }
}

pub fn parse_name(value: Option<&Value>) -> Result<String> {
    match Shape::from(value) {
        Shape::Text(name) => non_empty(name).ok_or(ScrapeError::RequiredFieldMissing("name")),
        _ => Err(ScrapeError::RequiredFieldMissing("name")),
    }
}

pub fn parse_ingredients(value: Option<&Value>) -> Result<Vec<String>> {
    flatten_entries(value, "recipeIngredient")?
        .into_iter()
        .map(|entry| match Shape::from(entry) {
            Shape::Text(ingredient) => Ok(ingredient.trim().to_string()),
            _ => Err(ScrapeError::UnparsableIngredient(entry.to_string())),
        })
        .collect()
}

/// Steps are plain strings or objects carrying `text` (e.g. `HowToStep`).
pub fn parse_steps(value: Option<&Value>) -> Result<Vec<String>> {
    flatten_entries(value, "recipeInstructions")?
        .into_iter()
        .map(|entry| match Shape::from(entry) {
            Shape::Text(step) => Ok(step.trim().to_string()),
            Shape::Mapping(object) => match Shape::from(object.get("text")) {
                Shape::Text(step) => Ok(step.trim().to_string()),
                _ => Err(ScrapeError::UnparsableStep(entry.to_string())),
            },
            _ => Err(ScrapeError::UnparsableStep(entry.to_string())),
        })
        .collect()
}

pub fn parse_image_url(value: Option<&Value>) -> Option<String> {
    let image = match Shape::from(value) {
        Shape::Sequence(images) => Shape::from(images.first()),
        other => other,
    };

    match image {
        Shape::Text(url) => non_empty(url),
        Shape::Mapping(object) => match Shape::from(object.get("url")) {
            Shape::Text(url) => non_empty(url),
            _ => None,
        },
        _ => None,
    }
}

/// Entries of a list field with one level of nesting flattened. A lone
/// value counts as a one-entry list.
fn flatten_entries<'a>(value: Option<&'a Value>, field: &'static str) -> Result<Vec<&'a Value>> {
    match Shape::from(value) {
        Shape::Absent => Err(ScrapeError::RequiredFieldMissing(field)),
        Shape::Sequence(items) => Ok(items
            .iter()
            .flat_map(|item| match item {
                Value::Array(nested) => nested.iter().collect::<Vec<_>>(),
                other => vec![other],
            })
            .collect()),
        _ => Ok(value.into_iter().collect()),
    }
}

/// Trimmed copy of `text`, or `None` when nothing is left.
pub(crate) fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
