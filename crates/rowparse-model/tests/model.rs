//! Tests for rowparse-model types.

use rowparse_model::{Issue, RowError};

#[test]
fn row_error_summary_joins_messages() {
    let error = RowError::new(
        3,
        vec!["Bob".to_string(), "thirty".to_string()],
        vec![
            Issue::TypeMismatch {
                field: 1,
                expected: "number".to_string(),
                found: "thirty".to_string(),
            },
            Issue::Required { field: 2 },
        ],
    );
    assert_eq!(
        error.summary(),
        "field 1: expected number, found 'thirty'; field 2 is required"
    );
}

#[test]
fn row_error_serializes_with_issue_codes() {
    let error = RowError::new(
        1,
        vec!["name".to_string(), "age".to_string()],
        vec![Issue::TypeMismatch {
            field: 1,
            expected: "number".to_string(),
            found: "age".to_string(),
        }],
    );
    let json = serde_json::to_value(&error).expect("serialize row error");
    assert_eq!(json["row"], 1);
    assert_eq!(json["raw"][0], "name");
    assert_eq!(json["issues"][0]["code"], "type_mismatch");
    assert_eq!(json["issues"][0]["field"], 1);

    let round: RowError = serde_json::from_value(json).expect("deserialize row error");
    assert_eq!(round, error);
}
