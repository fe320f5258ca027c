use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProverkaError {
    #[error("Video link is empty")]
    EmptyLink,

    #[error("Unsupported video link: {url}")]
    UnsupportedPlatform { url: String },

    #[error("Could not extract a video id from {url}")]
    VideoIdNotFound { url: String },

    #[error("Report generation failed: {reason}")]
    ReportFailed { reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Transcript request failed: {0}")]
    ApiError(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, ProverkaError>;
