use thiserror::Error;

/// Reasons a submitted URL is rejected before analysis starts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyzeError {
    #[error("no URL was entered")]
    EmptyUrl,

    #[error("malformed URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl AnalyzeError {
    /// Toast heading shown to the user.
    pub fn title(&self) -> &'static str {
        match self {
            AnalyzeError::EmptyUrl => "URL Required",
            AnalyzeError::InvalidUrl(_) => "Invalid URL",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AnalyzeError::EmptyUrl => "Please enter a clothing item URL to analyze",
            AnalyzeError::InvalidUrl(_) => "Please enter a valid URL",
        }
    }
}
