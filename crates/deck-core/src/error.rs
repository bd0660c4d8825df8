use thiserror::Error;

/// Errors that can occur while building or navigating a presentation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DeckError {
    #[error("Invalid section key: {0}")]
    InvalidKey(String),

    #[error("Section not found: {0}")]
    NotFound(String),

    #[error("Duplicate section key: {0}")]
    DuplicateKey(String),

    #[error("Presentation has no sections")]
    EmptyRegistry,

    #[error("Section '{0}' embeds more than one code sample")]
    MultipleCodeSamples(String),

    #[error("Settings error: {0}")]
    Settings(String),
}

impl From<serde_json::Error> for DeckError {
    fn from(error: serde_json::Error) -> Self {
        DeckError::Settings(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DeckError>;
