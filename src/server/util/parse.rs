use crate::server::error::AppError;

/// Message returned for any unknown record.
pub const NOT_FOUND: &str = "Not found.";

/// Parses a record id from a path segment.
///
/// Anything that is not a valid `i32` cannot name a stored record, so it is reported
/// as not found rather than as a malformed request.
///
/// # Arguments
/// - `value` - The raw path segment
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed id
/// - `Err(AppError::NotFound)` - The segment is not an integer
pub fn parse_id(value: &str) -> Result<i32, AppError> {
    value
        .parse::<i32>()
        .map_err(|_| AppError::NotFound(NOT_FOUND.to_string()))
}
