use thiserror::Error;

// Word list reading errors
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("Unsupported word list format: {0} (expected .txt or .docx)")]
    UnsupportedFormat(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed document: {0}")]
    Parse(String),
}

// Dictionary lookup errors, kept for diagnostics only
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),
    #[error("Dictionary service returned status {0}")]
    Status(u16),
    #[error("Unexpected response shape: {0}")]
    MalformedResponse(String),
}

#[derive(Error, Debug)]
pub enum EnrichError {
    #[error(transparent)]
    Read(#[from] ReadError),
    #[error("Failed to write word records: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to serialize word records: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("I/O error: {0}")]
    Io(std::io::Error),
    #[error("Invalid JSON: {0}")]
    Json(serde_json::Error),
    #[error("Expected a JSON array of word entries")]
    NotAnArray,
    #[error("Entry {index} is missing field `{field}`")]
    MissingField { index: usize, field: String },
}
