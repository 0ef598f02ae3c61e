use thiserror::Error;

#[derive(Error, Debug)]
pub enum CopymarkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scan error: {0}")]
    Scan(#[from] walkdir::Error),
}

pub type Result<T> = std::result::Result<T, CopymarkError>;
