use super::Shape;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

// Day component is accepted but not reported.
static ISO_DURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"P(?:\d+D)?T(?:(\d+)H)?(?:(\d+)M)?").expect("duration pattern is valid")
});

/// Render an ISO-8601 duration such as `PT1H30M` as `1 hours 30 minutes`.
///
/// Best effort: anything that is not a matching string, or a duration of
/// zero, yields `None`.
pub fn parse_duration(value: Option<&Value>) -> Option<String> {
    let Shape::Text(text) = Shape::from(value) else {
        return None;
    };
    let captures = ISO_DURATION.captures(text)?;

    let component = |index: usize| -> Option<u64> {
        captures
            .get(index)
            .map_or(Some(0), |m| m.as_str().parse().ok())
    };
    let hours = component(1)?;
    let minutes = component(2)?;

    let mut segments = Vec::new();
    if hours > 0 {
        segments.push(format!("{hours} hours"));
    }
    if minutes > 0 {
        segments.push(format!("{minutes} minutes"));
    }

    if segments.is_empty() {
        None
    } else {
        Some(segments.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn duration(raw: &str) -> Option<String> {
        parse_duration(Some(&json!(raw)))
    }

    #[test]
    fn test_duration_conversion() {
        assert_eq!(duration("PT1H30M").as_deref(), Some("1 hours 30 minutes"));
        assert_eq!(duration("PT45M").as_deref(), Some("45 minutes"));
        assert_eq!(duration("PT2H").as_deref(), Some("2 hours"));
        assert_eq!(duration("PT1H").as_deref(), Some("1 hours"));
        assert_eq!(duration("PT90M").as_deref(), Some("90 minutes"));
    }

    #[test]
    fn test_days_are_dropped() {
        assert_eq!(duration("P0DT0H25M").as_deref(), Some("25 minutes"));
        assert_eq!(duration("P1DT2H").as_deref(), Some("2 hours"));
        assert_eq!(duration("P1DT0H0M"), None);
    }

    #[test]
    fn test_zero_duration_is_absent() {
        assert_eq!(duration("P0DT0H0M"), None);
        assert_eq!(duration("PT0M"), None);
        assert_eq!(duration("PT"), None);
    }

    #[test]
    fn test_unparseable_duration_is_absent() {
        assert_eq!(duration("30 minutes"), None);
        assert_eq!(duration(""), None);
        assert_eq!(parse_duration(Some(&json!(30))), None);
        assert_eq!(parse_duration(Some(&json!(["PT30M"]))), None);
        assert_eq!(parse_duration(None), None);
    }

    #[test]
    fn test_duration_pattern_compiles() {
        let captures = ISO_DURATION.captures("P1DT2H5M").unwrap();
        assert_eq!(&captures[1], "2");
        assert_eq!(&captures[2], "5");
    }

    #[test]
    fn test_no_stray_whitespace() {
        let rendered = duration("PT0H5M").unwrap();
        assert_eq!(rendered, "5 minutes");
        assert_eq!(rendered, rendered.trim());
        assert!(!rendered.contains("  "));
    }
}
