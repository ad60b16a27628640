//! End-to-end directive validation tests

use ouroboros_directives::directive::*;
use ouroboros_directives::types::*;
use ouroboros_directives::{
    validate, validate_with_config, ErrorKind, LengthUnit, Validate, ValidateError,
    ValidationResult, ValidatorConfig,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn single(value: impl Into<Value>, directive: &str) -> ValidationResult<()> {
    let record = Record::new().field(Field::new("F", value).directive(directive));
    validate(&Value::from(record))
}

fn kinds(err: &ValidateError) -> Vec<(String, ErrorKind)> {
    err.field_errors()
        .iter()
        .map(|e| (e.field.clone(), e.kind()))
        .collect()
}

// ============================================================================
// Record Tests
// ============================================================================

#[test]
fn test_name_and_age() {
    init_tracing();
    let record = Record::named("User")
        .field(Field::new("Name", "Al").tag(r#"validate:"min:3""#))
        .field(Field::new("Age", 150).tag(r#"validate:"max:120""#));

    let err = validate(&Value::from(record)).unwrap_err();
    assert_eq!(
        kinds(&err),
        vec![
            ("Name".to_string(), ErrorKind::MinFailed),
            ("Age".to_string(), ErrorKind::MaxFailed),
        ]
    );
    assert_eq!(
        err.to_string(),
        "Name: min validation failed: len(Al) == 2 < 3\nAge: max validation failed: 150 > 120"
    );
}

#[test]
fn test_valid_record() {
    let record = Record::named("User")
        .field(Field::new("Name", "Alice").directive("min:3"))
        .field(Field::new("Age", 30).directive("max:120"))
        .field(Field::new("Role", "admin").directive("in:admin,user"))
        .field(Field::new("Zip", "12345").directive("len:5"))
        .field(Field::new("Tags", vec!["ab", "cd"]).directive("len:2"))
        .field(Field::new("Note", 1.5));

    assert!(validate(&Value::from(record)).is_ok());
}

#[test]
fn test_unexported_always_reported() {
    // Value passes its directive, visibility still fails
    let record = Record::new().field(Field::new("code", "abc").directive("len:3").unexported());
    let err = validate(&Value::from(record)).unwrap_err();
    assert_eq!(
        kinds(&err),
        vec![("code".to_string(), ErrorKind::UnexportedFieldNotAllowed)]
    );

    // Value fails too, both are reported
    let record = Record::new().field(Field::new("code", "ab").directive("len:3").unexported());
    let err = validate(&Value::from(record)).unwrap_err();
    assert_eq!(
        kinds(&err),
        vec![
            ("code".to_string(), ErrorKind::UnexportedFieldNotAllowed),
            ("code".to_string(), ErrorKind::LengthFailed),
        ]
    );
}

#[test]
fn test_failures_do_not_stop_other_fields() {
    let record = Record::new()
        .field(Field::new("A", 1).directive("min:1:2"))
        .field(Field::new("B", true).directive("min:1"))
        .field(Field::new("C", 7).directive("len:1"))
        .field(Field::new("D", 7).directive("in:1,2"))
        .field(Field::new("E", 7).directive("min:1"));

    let err = validate(&Value::from(record)).unwrap_err();
    assert_eq!(
        kinds(&err),
        vec![
            ("A".to_string(), ErrorKind::InvalidSyntax),
            ("B".to_string(), ErrorKind::UnsupportedType),
            ("C".to_string(), ErrorKind::UnsupportedOperationForType),
            ("D".to_string(), ErrorKind::InFailed),
        ]
    );
}

#[test]
fn test_not_struct() {
    let err = validate(&Value::from(vec![1_i64])).unwrap_err();
    assert!(matches!(err, ValidateError::NotStruct { kind: "array" }));
}

#[test]
fn test_validate_trait() {
    struct Order {
        status: String,
        quantities: Vec<i64>,
        internal_ref: String,
    }

    impl Validate for Order {
        fn record(&self) -> Record {
            Record::named("Order")
                .field(Field::new("Status", self.status.as_str()).directive("in:open,closed"))
                .field(Field::new("Quantities", self.quantities.clone()).directive("min:1"))
                .field(Field::new("internal_ref", self.internal_ref.as_str()).unexported())
        }
    }

    let ok = Order {
        status: "open".into(),
        quantities: vec![1, 2],
        internal_ref: "x".into(),
    };
    assert!(ok.validate().is_ok());

    let bad = Order {
        status: "pending".into(),
        quantities: vec![3, 0, -1],
        internal_ref: "x".into(),
    };
    let err = bad.validate().unwrap_err();
    assert_eq!(err.field_errors().len(), 2);
    assert_eq!(
        err.field_errors()[0].to_string(),
        r#"Status: in validation failed: "pending" is not in {"closed", "open"}"#
    );
    assert_eq!(
        err.field_errors()[1].to_string(),
        "Quantities: min validation failed: 0 < 1"
    );
}

// ============================================================================
// Directive Parsing Tests
// ============================================================================

#[test]
fn test_parse_examples() {
    let directive = parse_directive("min:5").unwrap();
    assert_eq!(directive.operation, Operation::Min);
    assert_eq!(directive.args, vec!["5"]);

    assert!(parse_directive("min:5:6").unwrap_err().is(ErrorKind::InvalidSyntax));
    assert!(parse_directive("foo:1").unwrap_err().is(ErrorKind::UnsupportedOperation));
    assert!(parse_directive("min:1,2").unwrap_err().is(ErrorKind::InvalidSyntax));
}

#[test]
fn test_negative_len_rejected() {
    let err = single("abc", "len:-1").unwrap_err();
    assert_eq!(kinds(&err), vec![("F".to_string(), ErrorKind::InvalidSyntax)]);
}

// ============================================================================
// Integer Tests
// ============================================================================

#[test]
fn test_int_bounds_property() {
    let samples = [i64::MIN, -100, -1, 0, 1, 5, 99, i64::MAX];
    for x in samples {
        for b in samples {
            let min = single(x, &format!("min:{}", b));
            assert_eq!(min.is_err(), x < b, "min {} {}", x, b);
            if let Err(err) = min {
                assert!(err.is(ErrorKind::MinFailed));
            }

            let max = single(x, &format!("max:{}", b));
            assert_eq!(max.is_err(), x > b, "max {} {}", x, b);
            if let Err(err) = max {
                assert!(err.is(ErrorKind::MaxFailed));
            }
        }
    }
}

#[test]
fn test_int_len_always_unsupported() {
    for (x, b) in [(0, 0), (5, 1), (-3, 2), (12345, 5)] {
        let err = single(x, &format!("len:{}", b)).unwrap_err();
        assert!(err.is(ErrorKind::UnsupportedOperationForType));
    }
}

#[test]
fn test_int_membership() {
    assert!(single(2, "in:1,2,3").is_ok());
    assert!(single(-2, "in:-2,+5").is_ok());
    assert!(single(5, "in:-2,+5").is_ok());
    assert!(single(4, "in:1,2,3").unwrap_err().is(ErrorKind::InFailed));
    assert!(single(1, "in:1, 2").unwrap_err().is(ErrorKind::InvalidSyntax));
}

// ============================================================================
// String Tests
// ============================================================================

#[test]
fn test_string_len_property() {
    for s in ["", "a", "abc", "hello world"] {
        let n = s.chars().count();
        for b in [0, 1, 3, n, n + 1] {
            let result = single(s, &format!("len:{}", b));
            assert_eq!(result.is_err(), n != b, "len({:?}) vs {}", s, b);
            if let Err(err) = result {
                assert!(err.is(ErrorKind::LengthFailed));
            }
        }
    }
}

#[test]
fn test_string_min_max_length() {
    assert!(single("abc", "min:3").is_ok());
    assert!(single("ab", "min:3").unwrap_err().is(ErrorKind::MinFailed));
    assert!(single("abc", "max:3").is_ok());
    assert!(single("abcd", "max:3").unwrap_err().is(ErrorKind::MaxFailed));
}

#[test]
fn test_string_membership() {
    assert!(single("b", "in:a,b,c").is_ok());
    assert!(single("a", "in:a,a").is_ok());
    assert!(single("d", "in:a,b,c").unwrap_err().is(ErrorKind::InFailed));

    // Tokens are not trimmed
    assert!(single("b", "in:a, b").unwrap_err().is(ErrorKind::InFailed));
    assert!(single(" b", "in:a, b").is_ok());
}

#[test]
fn test_length_unit_config() {
    let record = Value::from(Record::new().field(Field::new("City", "Zürich").directive("len:6")));
    assert!(validate(&record).is_ok());

    let bytes = ValidatorConfig::new().with_length_unit(LengthUnit::Bytes);
    let err = validate_with_config(&record, &bytes).unwrap_err();
    assert!(err.is(ErrorKind::LengthFailed));
}

// ============================================================================
// List Tests
// ============================================================================

#[test]
fn test_list_stops_at_first_failure() {
    let err = single(vec![1_i64, 10, 3], "max:5").unwrap_err();
    assert_eq!(kinds(&err), vec![("F".to_string(), ErrorKind::MaxFailed)]);
    assert_eq!(err.to_string(), "F: max validation failed: 10 > 5");

    let err = single(vec![1_i64, 10, 30], "max:5").unwrap_err();
    assert_eq!(err.field_errors().len(), 1);
}

#[test]
fn test_list_of_strings() {
    assert!(single(vec!["red", "blue"], "in:red,green,blue").is_ok());
    let err = single(vec!["red", "pink", "gray"], "in:red,green,blue").unwrap_err();
    assert!(err.to_string().contains("\"pink\""));
    assert!(!err.to_string().contains("\"gray\""));
}

#[test]
fn test_empty_list_passes() {
    assert!(single(Vec::<String>::new(), "len:3").is_ok());
}

// ============================================================================
// Error Report Tests
// ============================================================================

#[cfg(feature = "serde")]
#[test]
fn test_json_report() {
    let record = Record::new()
        .field(Field::new("Name", "Al").directive("min:3"))
        .field(Field::new("secret", 1).directive("min:0").unexported());

    let err = validate(&Value::from(record)).unwrap_err();
    let ValidateError::Fields(errors) = err else {
        panic!("expected field errors");
    };

    assert_eq!(
        errors.to_json(),
        serde_json::json!([
            {
                "field": "Name",
                "kind": "min_failed",
                "message": "min validation failed: len(Al) == 2 < 3"
            },
            {
                "field": "secret",
                "kind": "unexported_field_not_allowed",
                "message": "validation for unexported field is not allowed: field \"secret\""
            }
        ])
    );
}
