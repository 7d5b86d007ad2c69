use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("product name must not be empty")]
    EmptyName,
}

pub type Result<T> = std::result::Result<T, ModelError>;
