//! Formatting helpers for presenting scores.

/// Whole scores print without decimals; anything else keeps one place.
pub fn format_score(value: f64) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

/// `42/50` style label.
pub fn format_out_of(value: f64, max: f64) -> String {
    format!("{}/{}", format_score(value), format_score(max))
}

/// Metric keys arrive as `snake_case`; show them as words.
pub fn humanize_key(key: &str) -> String {
    let spaced = key.replace(['_', '-'], " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_drop_trailing_zero() {
        assert_eq!(format_score(42.0), "42");
        assert_eq!(format_score(7.25), "7.2");
        assert_eq!(format_out_of(42.0, 50.0), "42/50");
        assert_eq!(format_score(f64::NAN), "—");
    }

    #[test]
    fn keys_become_words() {
        assert_eq!(humanize_key("response_time"), "Response time");
        assert_eq!(humanize_key(""), "");
    }
}
