use driftbrowser::types::errors::*;

// === StoreError Tests ===

#[test]
fn store_error_database_display() {
    let err = StoreError::DatabaseError("disk full".to_string());
    assert_eq!(err.to_string(), "Store database error: disk full");
}

#[test]
fn store_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(StoreError::DatabaseError("msg".to_string()));
    assert!(err.source().is_none());
}

// === SettingsError Tests ===

#[test]
fn settings_error_display_variants() {
    assert_eq!(
        SettingsError::IoError("file not found".to_string()).to_string(),
        "Settings I/O error: file not found"
    );
    assert_eq!(
        SettingsError::SerializationError("malformed json".to_string()).to_string(),
        "Settings serialization error: malformed json"
    );
    assert_eq!(
        SettingsError::InvalidKey("unknown.key".to_string()).to_string(),
        "Invalid settings key: unknown.key"
    );
    assert_eq!(
        SettingsError::InvalidValue("negative number".to_string()).to_string(),
        "Invalid settings value: negative number"
    );
}

// === Cross-cutting: all errors implement std::error::Error ===

#[test]
fn all_errors_implement_std_error() {
    // Verify each error type can be used as a trait object
    let errors: Vec<Box<dyn std::error::Error>> = vec![
        Box::new(StoreError::DatabaseError("msg".to_string())),
        Box::new(SettingsError::IoError("msg".to_string())),
    ];

    assert_eq!(errors.len(), 2);

    // Each error should have a non-empty display string
    for err in &errors {
        assert!(!err.to_string().is_empty());
    }
}

// === Debug trait verification ===

#[test]
fn all_errors_implement_debug() {
    let debug_str = format!("{:?}", StoreError::DatabaseError("test".to_string()));
    assert!(debug_str.contains("DatabaseError"));

    let debug_str = format!("{:?}", SettingsError::InvalidKey("test".to_string()));
    assert!(debug_str.contains("InvalidKey"));
}
