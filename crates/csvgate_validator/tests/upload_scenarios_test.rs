//! End-to-end scenarios: raw CSV text is loaded and validated, and the JSON
//! form of the result is compared with what the upload endpoint returns.

use csvgate_core::{DatasetBuilder, Status, ValidationError};
use csvgate_loader::parse_csv;
use csvgate_validator::{
    AGE_FORMAT_MESSAGE, AGE_RANGE_MESSAGE, CsvValidator, EMAIL_MISSING_MESSAGE,
    VOLUME_CHECK_MESSAGE, validate,
};
use pretty_assertions::assert_eq;
use serde_json::json;

/// Builds CSV text with a header and `rows` valid data lines.
fn valid_csv(header: &str, rows: usize) -> String {
    let mut csv = format!("{header}\n");
    for i in 1..=rows {
        csv.push_str(&format!("{i},user{i}@example.com,{}\n", 17 + i));
    }
    csv
}

#[test]
fn test_scenario_all_valid_passes() {
    let dataset = parse_csv(&valid_csv("id,email,age", 11)).unwrap();
    let result = validate(&dataset);

    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({"status": "pass", "errors": []})
    );
}

#[test]
fn test_scenario_missing_age_column() {
    let mut csv = String::from("id,email\n");
    for i in 1..=20 {
        csv.push_str(&format!("{i},user{i}@example.com\n"));
    }

    let result = validate(&parse_csv(&csv).unwrap());

    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({
            "status": "fail",
            "errors": [{
                "row_index": null,
                "id": null,
                "column": null,
                "error_message": "Missing required columns: age"
            }]
        })
    );
}

#[test]
fn test_scenario_ten_rows_fail_volume_regardless_of_content() {
    // Every cell is broken, but only the volume error is reported
    let mut csv = String::from("id,email,age\n");
    for i in 1..=10 {
        csv.push_str(&format!("{i},,not-a-number\n"));
    }

    let result = validate(&parse_csv(&csv).unwrap());

    assert_eq!(result.status, Status::Fail);
    assert_eq!(result.errors, vec![ValidationError::structural(VOLUME_CHECK_MESSAGE)]);
}

#[test]
fn test_scenario_row_level_errors() {
    let mut csv = valid_csv("id,email,age", 11);
    csv.push_str("12,a@b.c,abc\n");
    csv.push_str("13,a@b.c,150\n");
    csv.push_str("14,  ,30\n");

    let result = validate(&parse_csv(&csv).unwrap());

    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({
            "status": "fail",
            "errors": [
                {"row_index": 12, "id": "12", "column": "age", "error_message": AGE_FORMAT_MESSAGE},
                {"row_index": 13, "id": "13", "column": "age", "error_message": AGE_RANGE_MESSAGE},
                {"row_index": 14, "id": "14", "column": "email", "error_message": EMAIL_MISSING_MESSAGE},
            ]
        })
    );
}

#[test]
fn test_range_message_uses_en_dash() {
    assert_eq!(AGE_RANGE_MESSAGE, "Age out of allowed range (18\u{2013}100).");
}

#[test]
fn test_quoted_lines_and_mixed_case_header() {
    // Exporter wrapped every line in quotes and used an upper-case header
    let body = valid_csv("ID, Email ,AGE", 12);
    let quoted: String = body.lines().map(|l| format!("\"{l}\"\n")).collect();

    let result = validate(&parse_csv(&quoted).unwrap());
    assert!(result.passed(), "errors: {:?}", result.errors);
}

#[test]
fn test_short_rows_report_missing_fields() {
    let mut csv = valid_csv("id,email,age", 11);
    csv.push_str("12\n");

    let result = validate(&parse_csv(&csv).unwrap());

    let messages: Vec<_> = result
        .errors
        .iter()
        .map(|e| e.error_message.as_str())
        .collect();
    assert_eq!(messages, vec![EMAIL_MISSING_MESSAGE, AGE_FORMAT_MESSAGE]);
}

#[test]
fn test_idempotent_validation() {
    let mut csv = valid_csv("id,email,age", 11);
    csv.push_str("12,,5\n");
    let dataset = parse_csv(&csv).unwrap();

    let validator = CsvValidator::new();
    assert_eq!(validator.run(&dataset), validator.run(&dataset));
}

#[test]
fn test_row_independence() {
    let mut dataset = DatasetBuilder::new(["id", "email", "age"])
        .repeat_row(&["1", "a@b.c", "30"], 12)
        .build();

    let before = validate(&dataset);
    assert!(before.passed());

    // Blank the email of row 4 only
    dataset.rows_mut()[3].insert("email", "");
    let after = validate(&dataset);

    assert_eq!(after.errors.len(), 1);
    assert_eq!(after.errors[0].row_index, Some(4));
    assert_eq!(after.errors[0].column.as_deref(), Some("email"));
}

#[test]
fn test_pass_iff_every_row_valid() {
    let cases: &[(&str, &str, bool)] = &[
        ("a@b.c", "18", true),
        ("a@b.c", "100", true),
        ("a@b.c", "17", false),
        ("a@b.c", "101", false),
        ("", "30", false),
        ("a@b.c", "", false),
        ("a@b.c", "thirty", false),
    ];

    for (email, age, expected) in cases {
        let dataset = DatasetBuilder::new(["id", "email", "age"])
            .repeat_row(&["1", "ok@example.com", "40"], 11)
            .row(["12", *email, *age])
            .build();

        assert_eq!(
            validate(&dataset).passed(),
            *expected,
            "email={email:?} age={age:?}"
        );
    }
}
