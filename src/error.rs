pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid initial-condition record: {0}")]
    InvalidRecord(String),
    #[error("Body '{}' missing required properties {{{}}}", .body, .properties.join(", "))]
    MissingProperties { body: String, properties: Vec<String> },
    #[error("Body '{}' has unexpected properties {{{}}}", .body, .properties.join(", "))]
    UnexpectedProperties { body: String, properties: Vec<String> },
    #[error("Body '{body}' has an invalid '{property}' property: {reason}")]
    InvalidProperty { body: String, property: String, reason: String },
    #[error("Unsupported integration method '{0}' (expected one of: forward_euler, leapfrog)")]
    UnsupportedMethod(String),
    #[error("Invalid duration '{0}'")]
    InvalidDuration(String),
    #[error("Cannot allocate the state of {n_bodies} bodies over {n_steps} steps")]
    StateTooLarge { n_steps: usize, n_bodies: usize },
    #[error("Invalid case file: {0}")]
    InvalidCase(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Binary snapshot error: {0}")]
    Bincode(#[from] bincode::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
