use reqwest::StatusCode;

/// Error type for everything the script generator and TTS client can fail with.
///
/// Errors are terminal: no retries happen anywhere in this crate, every
/// failure is returned to the caller with its original detail attached.
#[derive(Debug, thiserror::Error)]
pub enum MindfulError {
    #[error("unrecognized technique: {0:?}")]
    UnrecognizedTechnique(String),

    /// Dispatch failure in the prompt builder. Unreachable as long as
    /// requests are built with the `Technique` enum, kept as the stated
    /// failure mode of the dispatch contract.
    #[error("unsupported technique")]
    UnsupportedTechnique,

    #[error("no {0} provided")]
    MissingCredential(&'static str),

    #[error("failed to generate script: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("upstream returned {status}: {body}")]
    UpstreamStatus { status: StatusCode, body: String },

    #[error("completion response contained no choices")]
    EmptyCompletion,

    #[error("failed to parse script: {source}\ncontent: {raw}")]
    ScriptParse {
        #[source]
        source: serde_json::Error,
        raw: String,
    },

    #[error("failed to write audio file: {0}")]
    Io(#[from] std::io::Error),
}
