//! Integration tests for error reporting and log output
//!
//! Tests validation failures, store errors and the log tail query

use fitcoach::error::{ErrorSeverity, FitCoachError, StoreError, ValidationError};
use fitcoach::logging::{tail_lines, DEFAULT_TAIL_LINES};
use fitcoach::models::{FitnessLevel, UserProfile, WorkoutType};
use fitcoach::store::{InMemoryProfileStore, ProfileStore};
use rust_decimal_macros::dec;
use std::io::Write;

#[test]
fn test_invalid_profiles_are_rejected() {
    let err = UserProfile::new("  ", 30, dec!(70), dec!(175), FitnessLevel::Beginner).unwrap_err();
    assert_eq!(err, ValidationError::EmptyName);

    let err = UserProfile::new("Ali", 0, dec!(70), dec!(175), FitnessLevel::Beginner).unwrap_err();
    assert_eq!(err, ValidationError::InvalidAge { age: 0 });

    let err = UserProfile::new("Ali", 30, dec!(-1), dec!(175), FitnessLevel::Beginner).unwrap_err();
    assert!(matches!(err, ValidationError::NonPositiveWeight { .. }));

    let err = UserProfile::new("Ali", 30, dec!(70), dec!(0), FitnessLevel::Beginner).unwrap_err();
    assert!(matches!(err, ValidationError::NonPositiveHeight { .. }));
}

#[test]
fn test_strict_label_parsing_errors() {
    assert_eq!(
        FitnessLevel::parse("expert").unwrap_err(),
        ValidationError::UnknownFitnessLevel {
            label: "expert".to_string()
        }
    );
    assert_eq!(
        WorkoutType::parse("yoga").unwrap_err(),
        ValidationError::UnknownWorkoutType {
            label: "yoga".to_string()
        }
    );
}

#[test]
fn test_store_errors_carry_severity() {
    let mut store = InMemoryProfileStore::new();
    let profile = UserProfile::new("Ali", 30, dec!(70), dec!(175), FitnessLevel::Beginner).unwrap();
    store.create(profile.clone()).unwrap();

    let err = store.create(profile).unwrap_err();
    assert!(matches!(err, FitCoachError::Store(StoreError::Duplicate { .. })));
    assert_eq!(err.severity(), ErrorSeverity::Error);

    let err = store.get(&"nobody".into()).unwrap_err();
    assert_eq!(err.severity(), ErrorSeverity::Warning);
    assert_eq!(err.severity().to_tracing_level(), tracing::Level::WARN);
    assert!(err.user_message().contains("register"));
}

#[test]
fn test_validation_error_user_message() {
    let err: FitCoachError = ValidationError::NonPositiveHeight { height: dec!(0) }.into();
    assert!(err.user_message().contains("kg and cm"));
    assert_eq!(err.severity(), ErrorSeverity::Warning);
}

#[test]
fn test_log_tail_query() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("api.log");

    // No file yet: empty list, not an error
    assert!(tail_lines(&path, DEFAULT_TAIL_LINES).unwrap().is_empty());

    let mut file = std::fs::File::create(&path).unwrap();
    for i in 0..3 {
        writeln!(file, "{{\"level\":\"INFO\",\"message\":\"request {}\"}}", i).unwrap();
    }

    let lines = tail_lines(&path, DEFAULT_TAIL_LINES).unwrap();
    assert_eq!(lines.len(), 3);
    assert!(lines[2].contains("request 2"));
}
