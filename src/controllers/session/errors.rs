/// A render collaborator failure. Never fatal to the session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("render failed: {message}")]
pub struct RenderError {
    pub message: String,
}

impl RenderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
