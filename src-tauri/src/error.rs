use thiserror::Error;

#[derive(Debug, Error)]
pub enum StudioError {
    #[error("Please enter a prompt for image generation")]
    EmptyPrompt,

    #[error("Failed to generate image: {0}")]
    Transport(String),

    #[error("{0}")]
    EmptyResult(String),

    #[error("Session storage error: {0}")]
    Persistence(String),
}

impl From<StudioError> for String {
    fn from(err: StudioError) -> Self {
        err.to_string()
    }
}
