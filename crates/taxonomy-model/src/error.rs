use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown taxonomy category: {label}")]
    UnknownCategory { label: String },
    #[error("malformed taxonomy record: {reason}")]
    MalformedRecord { reason: String },
}

impl ModelError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
