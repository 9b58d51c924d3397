use thiserror::Error;

/// Errors raised by the drill engine. The first three are contract
/// violations by the caller and never shown to the user; the rest are
/// surfaced as notices.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("not enough distractors in the vocabulary pool ({available} available, 3 needed)")]
    InsufficientPool { available: usize },

    #[error("challenge already reached a terminal state")]
    AlreadyFinalized,

    #[error("challenge is still active; finish it before advancing")]
    ChallengeStillActive,

    #[error("skip is only available in the typed modes")]
    SkipUnsupported,

    #[error("attempt kind does not match the challenge mode")]
    AttemptModeMismatch,

    #[error("invalid vocabulary item: {0}")]
    InvalidVocabularyItem(String),

    #[error("vocabulary provider unavailable: {0}")]
    ProviderUnavailable(String),
}
