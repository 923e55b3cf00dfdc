use super::{non_empty, Shape};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

static LEADING_COUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+)\s*(.*?)\s*$").expect("yield pattern is valid")
});

/// Serving count and optional serving-size descriptor from `recipeYield`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Servings {
    pub servings: Option<String>,
    pub servings_size: Option<String>,
}

/// Split a `recipeYield` value into count and size.
///
/// Sites use `["6", "1/2 cup"]`, `["6 (1/2 cup)"]`, `6` or `"6 servings"`.
/// For arrays the count is the leading digits of the first entry; the size is
/// the second entry, or, when there is none, whatever follows those digits
/// (parentheses removed). Plain numbers and strings become the count as-is.
pub fn parse_servings(value: Option<&Value>) -> Servings {
    match Shape::from(value) {
        Shape::Sequence(entries) => match Shape::from(entries.first()) {
            Shape::Text(first) => from_yield_entries(first, entries.get(1)),
            _ => Servings::default(),
        },
        Shape::Number(count) => Servings {
            servings: Some(count.to_string()),
            servings_size: None,
        },
        Shape::Text(count) if !count.trim().is_empty() => Servings {
            servings: Some(count.to_string()),
            servings_size: None,
        },
        _ => Servings::default(),
    }
}

fn from_yield_entries(first: &str, second: Option<&Value>) -> Servings {
    let Some(captures) = LEADING_COUNT.captures(first) else {
        return Servings::default();
    };

    let trailing = captures.get(2).map_or("", |m| m.as_str());
    let servings_size = match Shape::from(second) {
        Shape::Text(size) if !size.trim().is_empty() => non_empty(size),
        _ => non_empty(strip_parentheses(trailing)),
    };

    Servings {
        servings: Some(captures[1].to_string()),
        servings_size,
    }
}

fn strip_parentheses(text: &str) -> &str {
    text.strip_prefix('(')
        .and_then(|inner| inner.strip_suffix(')'))
        .unwrap_or(text)
}
