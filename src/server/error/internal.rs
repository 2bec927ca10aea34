use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A persisted enumeration column holds a value the application does not know.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Unknown {field} value '{value}' in stored record")]
    UnknownStoredValue {
        /// Which field was being decoded (role, promo kind, access status)
        field: &'static str,
        /// The raw stored value
        value: String,
    },

    /// Password hashing failed.
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),
}
