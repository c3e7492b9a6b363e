use thiserror::Error;

#[derive(Error, Debug)]
pub enum UtilsError {
    #[error("Missing required input: {field}")]
    MissingInputError { field: String },
}

pub type Result<T> = std::result::Result<T, UtilsError>;
