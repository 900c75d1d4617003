#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid feed endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}

pub type DirectoryResult<T> = std::result::Result<T, DirectoryError>;
