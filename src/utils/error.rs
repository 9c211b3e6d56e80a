use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Feed request failed: {0}")]
    FeedError(#[from] reqwest::Error),

    #[error("Feed returned HTTP {status}")]
    FeedStatusError { status: u16 },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, DashboardError>;
