use thiserror::Error;

/// Rejection text the contract emits when its migration-tracking table
/// already holds an entry for the owner.
pub const DUPLICATE_ENTRY_MSG: &str = "could not insert object";

/// Errors for chain API requests.
#[derive(Error, Debug)]
pub enum ChainError {
    /// The request failed in transit.
    #[error(transparent)]
    RequestError(#[from] reqwest::Error),
    /// The node rejected the request.
    #[error("chain rejected request: {what}")]
    Rejected { what: String },
    /// The response could not be deserialized.
    #[error("deserialization error: {err}. Response: {text}")]
    ResponseSerdeJson {
        err: serde_json::Error,
        text: String,
    },
}

impl ChainError {
    /// True when a submission was rejected only because the owner has
    /// already been migrated. The matching rule lives here so a contract
    /// message change touches one predicate.
    pub fn is_duplicate_entry(&self) -> bool {
        matches!(self, ChainError::Rejected { what } if what.contains(DUPLICATE_ENTRY_MSG))
    }
}
