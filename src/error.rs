use crate::domain::processor::ProcessorKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("Unauthorized payment attempt via {processor} processor")]
    Unauthorized { processor: ProcessorKind },
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PaymentError>;
