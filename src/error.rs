use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// A required field was left empty. The message is shown to the user as-is.
    #[error("{0}")]
    MissingInput(String),

    #[error("Failed to load image: {0}")]
    Image(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl AppError {
    /// True for errors the user can fix by changing their input.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            AppError::MissingInput(_) | AppError::Image(_) | AppError::InvalidData(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
