use crate::server::{error::AppError, util::validate::FieldErrors};
use serde_json::{json, Map, Value};
use test_utils::{builder::TestBuilder, factory};


/// Unwraps a JSON object literal into the map services accept.
fn body(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {}", other),
    }
}

/// Unwraps the field errors of a validation failure.
fn field_errors<T: std::fmt::Debug>(result: Result<T, AppError>) -> FieldErrors {
    match result {
        Err(AppError::Validation(errors)) => errors,
        other => panic!("expected validation errors, got {:?}", other),
    }
}
