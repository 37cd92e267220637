//! Helpers shared by the form handlers: validation messages and numeric
//! input parsing.

use std::collections::HashMap;

use shared_types::AppError;
use validator::ValidationErrors;

/// Flatten `validator` output into one message per field.
pub fn field_errors(errors: &ValidationErrors) -> HashMap<String, String> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let message = errs
                .iter()
                .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| format!("Invalid {field}"));
            (field.to_string(), message)
        })
        .collect()
}

/// Inline message for one field.
pub fn error_for(local: &HashMap<String, String>, field: &str) -> Option<String> {
    local.get(field).cloned()
}

/// Convert an API error into the form's error map plus a banner message.
pub fn apply_server_error(error: &AppError) -> (HashMap<String, String>, String) {
    (error.field_errors.clone(), error.message.clone())
}

pub fn parse_count(value: &str) -> u32 {
    value.trim().parse().unwrap_or(0)
}

pub fn parse_amount(value: &str) -> f64 {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// `None` for blank optional text inputs.
pub fn opt_str(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
