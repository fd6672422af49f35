//! Small helpers for reading and writing CSS values

/// Replace every run of whitespace with a single `_`, the escaping used
/// inside arbitrary-value utility tokens
pub fn escape_whitespace(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_space = false;
    for ch in value.chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push('_');
                in_space = true;
            }
        } else {
            out.push(ch);
            in_space = false;
        }
    }
    out
}

/// Parse a plain number such as `1`, `0.5` or `-2`
pub fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Parse a pixel length (`16px`, `0.5px`); a bare `0` is accepted too
pub fn parse_px(value: &str) -> Option<f64> {
    let value = value.trim();
    match value.strip_suffix("px") {
        Some(number) => parse_number(number),
        None if value == "0" => Some(0.0),
        None => None,
    }
}

/// Format a number without a trailing `.0`, keeping at most four decimals
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        return format!("{}", value as i64);
    }
    let formatted = format!("{:.4}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Split a space-separated value list, ignoring spaces inside parentheses
pub fn split_components(value: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start: Option<usize> = None;
    for (index, ch) in value.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
        if ch.is_whitespace() && depth == 0 {
            if let Some(s) = start.take() {
                parts.push(&value[s..index]);
            }
        } else if start.is_none() {
            start = Some(index);
        }
    }
    if let Some(s) = start {
        parts.push(&value[s..]);
    }
    parts
}
