use super::{non_empty, Shape};
use serde_json::Value;

/// Keys describing the nutrition object rather than a nutrient.
const METADATA_KEYS: [&str; 2] = ["@type", "servingSize"];

/// Rendering of the `carbohydrate` key word, kept as existing consumers see it.
const CARBOHYDRATE_LABEL: &str = "carbohydrates";

/// Flatten a schema.org `NutritionInformation` object into one line, e.g.
/// `200 calories, 10 g fat, 18 grams carbohydrates`.
///
/// Keys are rendered in document order. Non-object input, or an object with
/// nothing to render, yields `None`.
pub fn parse_nutrition(value: Option<&Value>) -> Option<String> {
    let Shape::Mapping(nutrients) = Shape::from(value) else {
        return None;
    };

    let rendered = nutrients
        .iter()
        .filter(|(key, _)| !METADATA_KEYS.contains(&key.as_str()))
        .filter_map(|(key, value)| nutrient_value(value).map(|value| render_nutrient(key, &value)))
        .collect::<Vec<_>>()
        .join(", ");

    non_empty(rendered.trim_end_matches(|c: char| c == ',' || c.is_whitespace()))
}

/// `10 g` under `fatContent` becomes `10 g fat`. Longer values, and values
/// already ending in `calories`, are kept as they are.
pub fn render_nutrient(key: &str, value: &str) -> String {
    if value.split_whitespace().count() <= 2 && !value.ends_with("calories") {
        format!("{value} {}", humanize_key(key))
    } else {
        value.to_string()
    }
}

/// `saturatedFatContent` -> `saturated fat`
pub fn humanize_key(key: &str) -> String {
    let base = key.strip_suffix("Content").unwrap_or(key);

    let mut spaced = String::with_capacity(base.len() + 4);
    for (index, c) in base.chars().enumerate() {
        if c.is_uppercase() && index > 0 {
            spaced.push(' ');
        }
        spaced.extend(c.to_lowercase());
    }

    spaced
        .split(' ')
        .map(|word| {
            if word == "carbohydrate" {
                CARBOHYDRATE_LABEL
            } else {
                word
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn nutrient_value(value: &Value) -> Option<String> {
    match Shape::from(value) {
        Shape::Text(text) => non_empty(text),
        Shape::Number(number) => Some(number.to_string()),
        _ => None,
    }
}
