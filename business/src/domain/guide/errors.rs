#[derive(Debug, thiserror::Error)]
pub enum GuideError {
    #[error("guide.transcript_empty")]
    TranscriptEmpty,
    #[error("guide.completion_failed")]
    CompletionFailed,
}
