use thiserror::Error;

/// Errors attached to a single input record
/// These are collected into the report and never abort a batch
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("malformed load record: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("load record is not valid UTF-8: {0}")]
    InvalidUtf8(#[source] std::str::Utf8Error),

    #[error("invalid load amount {literal:?}: expected \"$<digits>.<digits>\"")]
    AmountFormat { literal: String },

    #[error("could not encode decision for load {load_id} (customer {customer_id}): {source}")]
    Encode {
        load_id: String,
        customer_id: String,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// True for every failure to turn a line into a load, amount errors included
    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            LoadError::Decode(_) | LoadError::InvalidUtf8(_) | LoadError::AmountFormat { .. }
        )
    }
}

/// Errors that stop a batch: reading the input or writing the output
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
