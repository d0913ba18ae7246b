//! Input validation for CLI arguments. Runs before the client logs in.

use anyhow::{bail, Result};
use duke_api::types::{MeasureCategory, MeasureLevel};

pub const MAX_MEASURE_LENGTH: usize = 100;

/// Strip ASCII control characters, trim whitespace, and enforce a byte-length limit.
pub fn sanitize_text(input: &str, max_len: usize) -> Result<String> {
    if input.len() > max_len {
        bail!("input exceeds maximum length of {} bytes", max_len);
    }
    let cleaned: String = input.chars().filter(|c| !c.is_ascii_control()).collect();
    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        bail!("input must not be empty");
    }
    Ok(trimmed.to_string())
}

pub fn validate_category(input: &str) -> Result<MeasureCategory> {
    let normalized = input.trim().to_lowercase();
    match normalized.parse::<MeasureCategory>() {
        Ok(category) => Ok(category),
        Err(()) => bail!(
            "unknown category '{}'; expected one of: {}",
            input,
            MeasureCategory::ALL
                .iter()
                .map(|c| c.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}

pub fn validate_level(input: &str) -> Result<MeasureLevel> {
    match input.trim().to_lowercase().as_str() {
        "bg" | "block-group" | "block_group" => Ok(MeasureLevel::BlockGroup),
        "tract" => Ok(MeasureLevel::Tract),
        _ => bail!("unknown level '{}'; expected block_group or tract", input),
    }
}

pub fn validate_measure(input: &str) -> Result<String> {
    sanitize_text(input, MAX_MEASURE_LENGTH)
}

/// State filters are FIPS state codes: one or two digits.
pub fn validate_state(input: &str) -> Result<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed.len() > 2 || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        bail!("invalid state '{}'; expected a FIPS code such as 37", input);
    }
    Ok(trimmed.to_string())
}

pub fn validate_year(input: &str) -> Result<i32> {
    let trimmed = input.trim();
    if trimmed.len() != 4 || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        bail!("invalid year '{}'; expected four digits such as 2020", input);
    }
    Ok(trimmed.parse()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_control_chars() {
        assert_eq!(sanitize_text("  race\u{0007}_black  ", 100).unwrap(), "race_black");
    }

    #[test]
    fn test_sanitize_rejects_too_long() {
        assert!(sanitize_text(&"a".repeat(101), 100).is_err());
    }

    #[test]
    fn test_sanitize_rejects_empty() {
        assert!(sanitize_text(" \t ", 100).is_err());
    }

    #[test]
    fn test_validate_category() {
        assert_eq!(validate_category("Health").unwrap(), MeasureCategory::Health);
        assert_eq!(validate_category("housing").unwrap(), MeasureCategory::Housing);
        let err = validate_category("weather").unwrap_err().to_string();
        assert!(err.contains("demographics"));
    }

    #[test]
    fn test_validate_level_aliases() {
        assert_eq!(validate_level("bg").unwrap(), MeasureLevel::BlockGroup);
        assert_eq!(validate_level("block-group").unwrap(), MeasureLevel::BlockGroup);
        assert_eq!(validate_level("TRACT").unwrap(), MeasureLevel::Tract);
        assert!(validate_level("county").is_err());
    }

    #[test]
    fn test_validate_state() {
        assert_eq!(validate_state(" 37 ").unwrap(), "37");
        assert_eq!(validate_state("6").unwrap(), "6");
        assert!(validate_state("NC").is_err());
        assert!(validate_state("370").is_err());
        assert!(validate_state("").is_err());
    }

    #[test]
    fn test_validate_year() {
        assert_eq!(validate_year("2020").unwrap(), 2020);
        assert!(validate_year("20").is_err());
        assert!(validate_year("year").is_err());
    }

    #[test]
    fn test_validate_measure_keeps_colon() {
        assert_eq!(
            validate_measure("ethnicity_hispanic:percent").unwrap(),
            "ethnicity_hispanic:percent"
        );
    }
}
