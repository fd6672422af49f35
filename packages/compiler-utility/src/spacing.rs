//! Pixel lengths onto the 4px spacing scale

use stylecopy_common::{escape_whitespace, format_number, parse_px};

/// Largest step on the spacing scale (`96` = 384px)
const MAX_STEP: f64 = 96.0;

/// Scale step for a pixel length, or an arbitrary `[Npx]` value
pub fn quantize_px(px: f64) -> String {
    if px == 0.0 {
        return "0".to_string();
    }
    let step = px / 4.0;
    let is_half_step = step > 0.0 && step < 4.0 && step.fract() == 0.5;
    if is_half_step {
        return format_number(step);
    }
    if step.fract() == 0.0 && (1.0..=MAX_STEP).contains(&step) {
        return format_number(step);
    }
    if px == 1.0 {
        return "px".to_string();
    }
    format!("[{}px]", format_number(px))
}

/// Scale value for any length. `auto` passes through; values that are not
/// pixel lengths become arbitrary values.
pub fn quantize_spacing(value: &str) -> String {
    let value = value.trim();
    if value == "auto" {
        return value.to_string();
    }
    match parse_px(value) {
        Some(px) => quantize_px(px),
        None => format!("[{}]", escape_whitespace(value)),
    }
}

/// `{prefix}-{scale value}`, e.g. `w-4`
pub fn sized_token(prefix: &str, value: &str) -> String {
    format!("{}-{}", prefix, quantize_spacing(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_steps() {
        assert_eq!(quantize_spacing("0px"), "0");
        assert_eq!(quantize_spacing("16px"), "4");
        assert_eq!(quantize_spacing("4px"), "1");
        assert_eq!(quantize_spacing("384px"), "96");
    }

    #[test]
    fn test_half_steps() {
        assert_eq!(quantize_spacing("2px"), "0.5");
        assert_eq!(quantize_spacing("6px"), "1.5");
        assert_eq!(quantize_spacing("10px"), "2.5");
        assert_eq!(quantize_spacing("14px"), "3.5");
        // 18px would be 4.5, which is off the scale
        assert_eq!(quantize_spacing("18px"), "[18px]");
    }

    #[test]
    fn test_off_scale_values() {
        assert_eq!(quantize_spacing("1px"), "px");
        assert_eq!(quantize_spacing("13px"), "[13px]");
        assert_eq!(quantize_spacing("388px"), "[388px]");
        assert_eq!(quantize_spacing("12.123456px"), "[12.1235px]");
        assert_eq!(quantize_spacing("-8px"), "[-8px]");
    }

    #[test]
    fn test_non_pixel_values() {
        assert_eq!(quantize_spacing("50%"), "[50%]");
        assert_eq!(quantize_spacing("calc(100% - 8px)"), "[calc(100%_-_8px)]");
        assert_eq!(quantize_spacing("auto"), "auto");
        assert_eq!(sized_token("mx", "auto"), "mx-auto");
        assert_eq!(sized_token("w", "64px"), "w-16");
    }
}
