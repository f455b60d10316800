use thiserror::Error;

#[derive(Debug, Error)]
pub enum SkillError {
    #[error("Failed to parse webhook envelope: {0}")]
    ParseError(String),

    #[error("Failed to access Notion API: {0}")]
    ApiError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Unexpected Notion response shape: {0}")]
    MalformedData(String),
}

impl From<reqwest::Error> for SkillError {
    fn from(error: reqwest::Error) -> Self {
        SkillError::HttpError(error.to_string())
    }
}

impl From<anyhow::Error> for SkillError {
    fn from(error: anyhow::Error) -> Self {
        SkillError::ApiError(error.to_string())
    }
}
