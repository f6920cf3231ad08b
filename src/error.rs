use thiserror::Error;

/// Errors that can occur while scraping a recipe page
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Failed to reach the page
    #[error("Failed to fetch URL: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The page answered with a non-success status
    #[error("Unexpected HTTP status {status} from {url}")]
    HttpStatus { status: u16, url: String },

    /// A structural node the build cannot proceed without is absent
    #[error("Missing page structure: {0}")]
    MissingStructure(&'static str),

    /// A selector signature failed to compile
    #[error("Invalid selector: {0}")]
    Selector(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Incoming event could not be decoded, or a response could not be encoded
    #[error("Malformed event: {0}")]
    Event(#[from] serde_json::Error),

    /// Reading the event or writing the response failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
