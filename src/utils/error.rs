use thiserror::Error;

#[derive(Error, Debug)]
pub enum BillingError {
    #[error("Missing or empty field: {field}")]
    MissingField { field: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    OutOfRange {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Subscriber reference is missing")]
    AbsentSubscriber,

    #[error("Invalid configuration value for {field}: {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BillingError>;
