//! Field validation for material request submissions.
//!
//! These rules are applied by the HTTP layer before anything reaches the
//! repository, and again when a backup is restored at startup.

use crate::error::CoreError;

/// Maximum accepted length of an item name, in characters.
pub const MAX_ITEM_NAME_CHARS: usize = 200;

/// Maximum accepted length of free-text fields (specifications, reason, vendor).
pub const MAX_TEXT_CHARS: usize = 2000;

// ---------------------------------------------------------------------------
// Item name
// ---------------------------------------------------------------------------

/// Trim an item name and reject it if nothing is left.
pub fn normalize_item_name(raw: &str) -> Result<String, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("item_name is required".into()));
    }
    if trimmed.chars().count() > MAX_ITEM_NAME_CHARS {
        return Err(CoreError::Validation(format!(
            "item_name must be at most {MAX_ITEM_NAME_CHARS} characters"
        )));
    }
    Ok(trimmed.to_string())
}

// ---------------------------------------------------------------------------
// Quantity
// ---------------------------------------------------------------------------

/// Parse a quantity form value. Must be an integer of at least 1.
pub fn parse_quantity(raw: &str) -> Result<i64, CoreError> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| CoreError::Validation(format!("quantity must be a whole number, got '{raw}'")))?;
    validate_quantity(value)?;
    Ok(value)
}

/// Reject quantities below 1.
pub fn validate_quantity(value: i64) -> Result<(), CoreError> {
    if value < 1 {
        return Err(CoreError::Validation(format!(
            "quantity must be at least 1, got {value}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Optional text
// ---------------------------------------------------------------------------

/// Trim an optional free-text field; blank input becomes `None`.
pub fn normalize_optional_text(
    raw: Option<&str>,
    field: &str,
) -> Result<Option<String>, CoreError> {
    let Some(trimmed) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    if trimmed.chars().count() > MAX_TEXT_CHARS {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {MAX_TEXT_CHARS} characters"
        )));
    }
    Ok(Some(trimmed.to_string()))
}

/// Normalize list search text. Blank means "no search".
pub fn normalize_search(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn item_name_is_trimmed() {
        assert_eq!(normalize_item_name("  볼트 M8  ").unwrap(), "볼트 M8");
    }

    #[test]
    fn item_name_rejects_empty_and_whitespace() {
        assert_matches!(normalize_item_name(""), Err(CoreError::Validation(_)));
        assert_matches!(normalize_item_name(" \t\n "), Err(CoreError::Validation(_)));
    }

    #[test]
    fn item_name_rejects_overlong() {
        let long = "가".repeat(MAX_ITEM_NAME_CHARS + 1);
        assert!(normalize_item_name(&long).is_err());
        let exact = "가".repeat(MAX_ITEM_NAME_CHARS);
        assert!(normalize_item_name(&exact).is_ok());
    }

    #[test]
    fn quantity_accepts_positive_integers() {
        assert_eq!(parse_quantity("5").unwrap(), 5);
        assert_eq!(parse_quantity(" 12 ").unwrap(), 12);
        assert_eq!(parse_quantity("1").unwrap(), 1);
    }

    #[test]
    fn quantity_rejects_zero_and_negative() {
        assert_matches!(parse_quantity("0"), Err(CoreError::Validation(_)));
        assert_matches!(parse_quantity("-3"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn quantity_rejects_non_numeric() {
        assert!(parse_quantity("five").is_err());
        assert!(parse_quantity("").is_err());
        assert!(parse_quantity("2.5").is_err());
    }

    #[test]
    fn optional_text_blank_becomes_none() {
        assert_eq!(normalize_optional_text(None, "reason").unwrap(), None);
        assert_eq!(normalize_optional_text(Some("   "), "reason").unwrap(), None);
        assert_eq!(
            normalize_optional_text(Some(" 현장용 "), "reason").unwrap(),
            Some("현장용".to_string())
        );
    }

    #[test]
    fn optional_text_rejects_overlong() {
        let long = "x".repeat(MAX_TEXT_CHARS + 1);
        let err = normalize_optional_text(Some(&long), "vendor").unwrap_err();
        assert!(err.to_string().contains("vendor"));
    }

    #[test]
    fn search_blank_is_none() {
        assert_eq!(normalize_search(None), None);
        assert_eq!(normalize_search(Some("  ")), None);
        assert_eq!(normalize_search(Some(" 볼트 ")), Some("볼트".into()));
    }
}
