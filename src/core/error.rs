use thiserror::Error;

#[derive(Debug, Error)]
pub enum InvoiceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("generation error: {0}")]
    Generation(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type InvoiceResult<T> = Result<T, InvoiceError>;
