use bookmatch_core::text::Language;

/// Parse stop-word language from string
pub fn parse_language(s: &str) -> std::result::Result<Language, String> {
    s.parse::<Language>().map_err(|e| e.to_string())
}

/// Parse a score threshold in `[0, 1]`
pub fn parse_score(s: &str) -> std::result::Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{} is outside 0.0..=1.0", value))
    }
}
