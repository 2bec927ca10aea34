use axum::http::HeaderMap;

use crate::server::error::AppError;

/// Canonical form of an email address used as a lookup key.
///
/// Surrounding whitespace is removed and the address is lower-cased so that
/// `" Alice@X.com "` and `"alice@x.com"` refer to the same user.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Returns the trimmed value of a required request field.
///
/// # Arguments
/// - `name` - Field name used in the error message
/// - `value` - Raw field value from the request body
///
/// # Returns
/// - `Ok(&str)` - Trimmed, non-empty value
/// - `Err(AppError::Validation)` - The field is empty or whitespace only
pub fn required<'a>(name: &str, value: &'a str) -> Result<&'a str, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::Validation(format!("{} is required", name)));
    }

    Ok(value)
}

/// First address of the `X-Forwarded-For` header, if any.
pub fn forwarded_ip(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-forwarded-for")?
        .to_str()
        .ok()?
        .split(',')
        .map(str::trim)
        .find(|ip| !ip.is_empty())
        .map(str::to_string)
}
