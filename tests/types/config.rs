use string_rail::{GreetingConfig, StringOperationConfig};

#[test]
fn string_operation_config_defaults() {
    let config = StringOperationConfig::default();
    assert_eq!(config.locale(), None);
    assert!(!config.preserves_case());
    assert_eq!(config.max_length(), None);
}

#[test]
fn greeting_config_includes_the_timestamp_by_default() {
    let config = GreetingConfig::default();
    assert!(config.includes_timestamp());
    assert_eq!(config.default_greeting(), None);
    assert_eq!(config.options(), &StringOperationConfig::default());
}

#[test]
fn greeting_config_builders_reach_the_shared_options() {
    let config = GreetingConfig::new()
        .with_locale("en-US")
        .preserve_case(true)
        .with_max_length(40)
        .with_default_greeting("Hi")
        .include_timestamp(false);

    assert_eq!(config.options().locale(), Some("en-US"));
    assert!(config.options().preserves_case());
    assert_eq!(config.options().max_length(), Some(40));
    assert_eq!(config.default_greeting(), Some("Hi"));
    assert!(!config.includes_timestamp());
}

#[test]
fn greeting_config_from_shared_options() {
    let options = StringOperationConfig::new().with_max_length(12);
    let config = GreetingConfig::from(options.clone());

    assert_eq!(config.as_ref(), &options);
    assert!(config.includes_timestamp());
}

#[cfg(feature = "serde")]
mod serde_support {
    use serde_json::json;
    use string_rail::{hello, ErrorField, GreetingConfig, StringOperationConfig, ValidationError};

    #[test]
    fn greeting_config_reads_camel_case_keys() {
        let config: GreetingConfig = serde_json::from_value(json!({
            "locale": "en-US",
            "maxLength": 40,
            "preserveCase": true,
            "defaultGreeting": "Hi",
            "includeTimestamp": false
        }))
        .unwrap();

        assert_eq!(config.options().locale(), Some("en-US"));
        assert_eq!(config.options().max_length(), Some(40));
        assert!(config.options().preserves_case());
        assert_eq!(config.default_greeting(), Some("Hi"));
        assert!(!config.includes_timestamp());
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config: GreetingConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, GreetingConfig::default());

        let options: StringOperationConfig = serde_json::from_str(r#"{"maxLength": 5}"#).unwrap();
        assert_eq!(options, StringOperationConfig::new().with_max_length(5));
    }

    #[test]
    fn validation_error_round_trips() {
        let err = hello("John", Some("Hello"), Some(&GreetingConfig::new().with_max_length(10))).unwrap_err();

        let encoded = serde_json::to_value(&err).unwrap();
        assert_eq!(encoded["field"], "length");

        let decoded: ValidationError = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, err);
        assert!(decoded.is(ErrorField::Length));
    }

    #[test]
    fn json_values_feed_the_operations() {
        let name = json!("John");
        assert_eq!(hello(&name, None, None).unwrap(), "Hello, John!");

        let number = json!(123);
        assert!(hello(&number, None, None).unwrap_err().is(ErrorField::Type));

        let object = json!({ "name": "John" });
        let err = hello(&object, None, None).unwrap_err();
        assert_eq!(err.param("actual"), Some("object"));
    }
}
