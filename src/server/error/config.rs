use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but its value cannot be used.
    #[error("Invalid value for environment variable {name}: {reason}")]
    InvalidEnvVar {
        /// Name of the offending variable
        name: String,
        /// Why the value was rejected
        reason: String,
    },

    /// Only part of an optional group of variables is set.
    ///
    /// Integrations such as Telegram and Cloudinary are either fully configured or
    /// disabled; a half-configured group is rejected at startup.
    #[error("Incomplete configuration: {0}")]
    IncompleteGroup(String),
}
