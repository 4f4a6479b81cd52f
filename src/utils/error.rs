use thiserror::Error;

#[derive(Error, Debug)]
pub enum KitError {
    #[error("Invalid dimension for {field}: {value}")]
    InvalidDimensionError { field: String, value: f64 },

    #[error("Unsupported media format: {path}")]
    UnsupportedFormatError { path: String },

    #[error("Authentication required for reporting")]
    AccessDeniedError,

    #[error("Repository error: {message}")]
    RepositoryError { message: String },

    #[error("Rendering error: {message}")]
    RenderError { message: String },

    #[error("Invalid configuration value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, KitError>;
