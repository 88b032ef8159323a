use thiserror::Error;

#[derive(Debug, Error)]
pub enum FieldError {
    #[error("scale must be finite, got {0}")]
    InvalidScale(f64),
    #[error("attenuation threshold must be finite, got {0}")]
    InvalidThreshold(f64),
    #[error("invalid generator config: {0}")]
    Config(String),
}

impl From<serde_json::Error> for FieldError {
    fn from(err: serde_json::Error) -> Self {
        FieldError::Config(err.to_string())
    }
}
