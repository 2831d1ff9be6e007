use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Request to Gemini failed: {0}")]
    Transport(String),

    #[error("Invalid AI response: {0}")]
    InvalidAiResponse(String),

    #[error("Gemini API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Could not parse food search results: {0}")]
    SearchParse(String),

    #[error("No Gemini API key configured. Add it in Settings first.")]
    MissingApiKey,

    #[error("Keychain error: {0}")]
    Keychain(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Image error: {0}")]
    Image(String),
}

impl From<GatewayError> for String {
    fn from(err: GatewayError) -> Self {
        err.to_string()
    }
}
