use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Search element not found: {0}")]
    SearchElementNotFound(&'static str),

    #[error("Could not read result count from {0:?}")]
    InvalidResultCount(String),

    #[error("Company/record count mismatch: {names} names vs {records} records")]
    RowCountMismatch { names: usize, records: usize },

    #[error("Browser error: {0}")]
    Browser(anyhow::Error),

    #[error("Failed to write results: {0}")]
    Io(#[from] std::io::Error),
}

impl From<anyhow::Error> for ScrapeError {
    fn from(err: anyhow::Error) -> Self {
        ScrapeError::Browser(err)
    }
}
