use thiserror::Error;

/// Errors surfaced by the controller seams.
///
/// None of these reach the user. Storage failures are logged and swallowed
/// by [`crate::ThemeController`]; missing elements disable a feature.
#[derive(Debug, Error)]
pub enum UiError {
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("storage access failed: {0}")]
    Storage(String),

    #[error("element not found: {0}")]
    MissingElement(String),

    #[error("invalid theme value: {0:?}")]
    InvalidTheme(String),

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, UiError>;
