use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShopError {
    #[error("Flower not found: {0}")]
    FlowerNotFound(String),

    #[error("The flower {0} already exists")]
    DuplicateFlower(String),

    #[error("Nothing to save: the {0} list is empty")]
    EmptyCollection(&'static str),

    #[error("Record stream ended before the end marker ({0} records read)")]
    TruncatedStream(usize),

    #[error("Invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error("Input closed")]
    InputClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

impl ShopError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ShopError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ShopError>;
