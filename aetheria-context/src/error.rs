use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContextError {
    #[error("Tiktoken error: {0}")]
    Tiktoken(String),
}

impl From<ContextError> for aetheria_core::Error {
    fn from(err: ContextError) -> Self {
        aetheria_core::Error::Context(err.to_string())
    }
}
