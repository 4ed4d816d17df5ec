//! Tests for serialized location handling and cell-value detection.

#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use serde_json::json;
    use test_case::test_case;

    use gridstore::{CellValue, GridError, Location, Point};

    fn location(value: serde_json::Value) -> Location {
        serde_json::from_value(value).unwrap()
    }

    // ================================================================
    // Location resolution
    // ================================================================

    #[test]
    fn test_all_three_forms_address_the_same_cell() {
        let expected = Point::new(1, 2);
        assert_eq!(location(json!({"x": 1, "y": 2})).resolve().unwrap(), expected);
        assert_eq!(location(json!([1, 2])).resolve().unwrap(), expected);
        assert_eq!(location(json!("B3")).resolve().unwrap(), expected);
    }

    #[test_case(""; "empty string")]
    #[test_case("hello!"; "punctuation")]
    #[test_case("123"; "digits only")]
    #[test_case("ABC"; "letters only")]
    fn test_bad_reference_strings_fail(reference: &str) {
        let result = location(json!(reference)).resolve();
        assert!(matches!(result, Err(GridError::InvalidLocation(_))));
    }

    #[test]
    fn test_malformed_shapes_do_not_deserialize() {
        assert!(serde_json::from_value::<Location>(json!([1])).is_err());
        assert!(serde_json::from_value::<Location>(json!([1, 2, 3])).is_err());
        assert!(serde_json::from_value::<Location>(json!({"col": 1, "row": 2})).is_err());
        assert!(serde_json::from_value::<Location>(json!(true)).is_err());
    }

    // ================================================================
    // CellValue at the JSON boundary
    // ================================================================

    #[test]
    fn test_cell_values_deserialize_untagged() {
        let values: Vec<Option<CellValue>> =
            serde_json::from_value(json!([true, 2.5, "three", null])).unwrap();
        assert_eq!(
            values,
            vec![
                Some(CellValue::Bool(true)),
                Some(CellValue::Number(2.5)),
                Some(CellValue::Text("three".to_string())),
                None,
            ]
        );
    }

    #[test]
    fn test_cell_values_serialize_untagged() {
        let row = vec![
            Some(CellValue::Number(1.0)),
            None,
            Some(CellValue::Text("x".to_string())),
        ];
        assert_eq!(serde_json::to_value(&row).unwrap(), json!([1.0, null, "x"]));
    }
}
