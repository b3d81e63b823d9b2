//! Structured-object reader tests

use std::io::{Cursor, Write};

use ingest_guard::json::{JsonError, JsonOptions, JsonType, read_json, read_json_file, read_json_from};
use ingest_guard::source::Source;
use serde_json::json;

mod parsing_tests {
    use super::*;

    #[test]
    fn test_valid_object_returned_unchanged() {
        let text = r#"{"name": "Jan", "age": 30, "tags": ["a", "b"], "address": {"city": "Kraków"}}"#;
        let value = read_json(text, &JsonOptions::default()).unwrap();
        assert_eq!(
            value,
            json!({"name": "Jan", "age": 30, "tags": ["a", "b"], "address": {"city": "Kraków"}})
        );
    }

    #[test]
    fn test_grammar_violations() {
        let cases = [
            "",
            "   ",
            "{",
            r#"{"name": "Jan",}"#,
            "{name: \"Jan\"}",
            r#"{"name": "bad \q escape"}"#,
            "[1, 2",
            "{} {}",
            "NaN",
        ];

        for text in cases {
            let err = read_json(text, &JsonOptions::default()).unwrap_err();
            assert!(
                matches!(err, JsonError::InvalidFormat(_)),
                "expected InvalidFormat for {:?}, got {:?}",
                text,
                err
            );
            assert!(err.to_string().starts_with("Invalid JSON: "));
            assert!(!err.is_source_error());
        }
    }

    #[test]
    fn test_scalar_and_array_roots_skip_key_checks() {
        let options = JsonOptions::new()
            .required_keys(["name"])
            .key_type("name", JsonType::String);

        assert_eq!(read_json("[1, 2, 3]", &options).unwrap(), json!([1, 2, 3]));
        assert_eq!(read_json("\"text\"", &options).unwrap(), json!("text"));
        assert_eq!(read_json("42", &options).unwrap(), json!(42));
        assert_eq!(read_json("null", &options).unwrap(), json!(null));
    }
}

mod required_key_tests {
    use super::*;

    #[test]
    fn test_missing_key_is_reported() {
        let options = JsonOptions::new().required_keys(["name", "age"]);
        let err = read_json(r#"{"name": "Jan"}"#, &options).unwrap_err();
        assert_eq!(
            err,
            JsonError::MissingKeys {
                keys: vec!["age".into()]
            }
        );
        assert!(err.to_string().contains("age"));
    }

    #[test]
    fn test_all_missing_keys_in_caller_order() {
        let options = JsonOptions::new().required_keys(["zip", "name", "age", "city"]);
        let err = read_json(r#"{"name": "Jan"}"#, &options).unwrap_err();
        assert_eq!(err.to_string(), "Missing keys: zip, age, city");
    }

    #[test]
    fn test_null_value_counts_as_present() {
        let options = JsonOptions::new().required_keys(["name"]);
        assert!(read_json(r#"{"name": null}"#, &options).is_ok());
    }

    #[test]
    fn test_only_top_level_keys_count() {
        let options = JsonOptions::new().required_keys(["city"]);
        let err = read_json(r#"{"address": {"city": "Gdańsk"}}"#, &options).unwrap_err();
        assert!(matches!(err, JsonError::MissingKeys { .. }));
    }

    #[test]
    fn test_presence_checked_before_types() {
        let options = JsonOptions::new()
            .required_keys(["name", "age"])
            .key_type("name", JsonType::Integer);
        let err = read_json(r#"{"name": "Jan"}"#, &options).unwrap_err();
        assert!(matches!(err, JsonError::MissingKeys { .. }));
    }
}

mod key_type_tests {
    use super::*;

    #[test]
    fn test_matching_types_pass() {
        let options = JsonOptions::new()
            .key_type("name", JsonType::String)
            .key_type("age", JsonType::Integer)
            .key_type("height", JsonType::Float)
            .key_type("score", JsonType::Number)
            .key_type("active", JsonType::Boolean)
            .key_type("tags", JsonType::Array)
            .key_type("address", JsonType::Object);
        let text = r#"{
            "name": "Jan", "age": 30, "height": 1.82, "score": 7,
            "active": true, "tags": [], "address": {}
        }"#;
        assert!(read_json(text, &options).is_ok());
    }

    #[test]
    fn test_wrong_type() {
        let options = JsonOptions::new().key_type("age", JsonType::Integer);
        let err = read_json(r#"{"age": "30"}"#, &options).unwrap_err();
        assert_eq!(
            err,
            JsonError::WrongType {
                key: "age".into(),
                expected: JsonType::Integer,
                actual: JsonType::String
            }
        );
    }

    #[test]
    fn test_boolean_is_not_an_integer() {
        let options = JsonOptions::new().key_type("count", JsonType::Integer);
        let err = read_json(r#"{"count": true}"#, &options).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Key 'count' should be of type integer, got boolean."
        );
    }

    #[test]
    fn test_float_is_not_an_integer() {
        let options = JsonOptions::new().key_type("age", JsonType::Integer);
        assert!(read_json(r#"{"age": 30.5}"#, &options).is_err());
        assert!(read_json(r#"{"age": 30}"#, &options).is_ok());
    }

    #[test]
    fn test_null_and_absent_keys_are_skipped() {
        let options = JsonOptions::new()
            .key_type("age", JsonType::Integer)
            .key_type("email", JsonType::String);
        assert!(read_json(r#"{"age": null}"#, &options).is_ok());
    }

    #[test]
    fn test_first_rule_in_declaration_order_wins() {
        let options = JsonOptions::new()
            .key_type("b", JsonType::String)
            .key_type("a", JsonType::String);
        let err = read_json(r#"{"a": 1, "b": 2}"#, &options).unwrap_err();
        assert!(matches!(err, JsonError::WrongType { ref key, .. } if key == "b"));
    }
}

mod source_tests {
    use super::*;

    #[test]
    fn test_read_from_stream() {
        let options = JsonOptions::new().required_keys(["id"]);
        let value = read_json_from(Source::stream(Cursor::new(r#"{"id": 1}"#)), &options).unwrap();
        assert_eq!(value["id"], 1);
    }

    #[test]
    fn test_invalid_utf8_bytes() {
        let bytes: &[u8] = b"{\"name\": \"\xff\"}";
        let err = read_json_from(Source::Bytes(bytes), &JsonOptions::default()).unwrap_err();
        assert!(matches!(err, JsonError::Encoding(_)));
        assert!(err.is_source_error());
    }

    #[test]
    fn test_read_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"name": "Jan", "age": 30}}"#).unwrap();

        let options = JsonOptions::new()
            .required_keys(["name", "age"])
            .key_type("age", JsonType::Integer);
        let value = read_json_file(file.path(), &options).unwrap();
        assert_eq!(value["name"], "Jan");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let err = read_json_file(&path, &JsonOptions::default()).unwrap_err();
        assert_eq!(err, JsonError::FileNotFound { path });
        assert!(err.is_source_error());
    }
}
