/// Why a single translation call failed.
///
/// Every variant is reported to the user the same way, as
/// [`TRANSLATION_ERROR`](super::TRANSLATION_ERROR); the distinction only
/// reaches the logs.
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    /// Nothing to translate.
    #[error("empty input")]
    EmptyInput,

    /// The request could not be sent or the body could not be read.
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("provider returned status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The provider answered, but not in the expected shape.
    #[error("unexpected response: {0}")]
    InvalidResponse(String),

    /// The provider cannot translate into this language.
    #[error("unsupported target language: {0}")]
    UnsupportedLanguage(String),
}

/// Result of one provider call.
pub type TranslateResult<T> = Result<T, TranslateError>;
