use serde::{Deserialize, Serialize};

/// A cell value as the widget boundary sees it.
///
/// The store itself is generic over the value type; `CellValue` is the
/// concrete instantiation used by the WASM surface and the CLI. Absence is
/// not a variant: an absent cell is simply missing from the store, and
/// `Option<CellValue>` carries that distinction through every API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Detect the value type from raw edit input.
    ///
    /// - Empty (or all-whitespace) input → `None`, which clears the cell
    /// - "true"/"false" (case-insensitive) → `Bool`
    /// - Parseable as f64 → `Number`
    /// - Otherwise → `Text`
    #[must_use]
    pub fn detect(input: &str) -> Option<Self> {
        let trimmed = input.trim();

        if trimmed.is_empty() {
            return None;
        }

        if trimmed.eq_ignore_ascii_case("true") {
            return Some(Self::Bool(true));
        }
        if trimmed.eq_ignore_ascii_case("false") {
            return Some(Self::Bool(false));
        }

        if let Ok(n) = trimmed.parse::<f64>() {
            return Some(Self::Number(n));
        }

        Some(Self::Text(trimmed.to_string()))
    }

    /// The display string for this value; booleans render as TRUE/FALSE.
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Bool(true) => "TRUE".to_string(),
            Self::Bool(false) => "FALSE".to_string(),
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_empty_clears() {
        assert_eq!(CellValue::detect(""), None);
        assert_eq!(CellValue::detect("   "), None);
    }

    #[test]
    fn test_detect_boolean() {
        assert_eq!(CellValue::detect("true"), Some(CellValue::Bool(true)));
        assert_eq!(CellValue::detect("FALSE"), Some(CellValue::Bool(false)));
    }

    #[test]
    fn test_detect_number() {
        assert_eq!(CellValue::detect("3.5"), Some(CellValue::Number(3.5)));
        assert_eq!(CellValue::detect("-12"), Some(CellValue::Number(-12.0)));
    }

    #[test]
    fn test_detect_text() {
        assert_eq!(
            CellValue::detect("hello"),
            Some(CellValue::Text("hello".to_string()))
        );
    }

    #[test]
    fn test_boolean_display_is_uppercase() {
        assert_eq!(CellValue::Bool(true).display(), "TRUE");
        assert_eq!(CellValue::Bool(false).display(), "FALSE");
    }
}
