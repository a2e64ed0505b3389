use thiserror::Error;

/// Message shown when the catalog endpoint answers with a non-2xx status
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load catalog";

/// Errors surfaced to the user by the configurator.
///
/// `Display` yields the raw message, which is rendered as is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfiguratorError {
    /// Catalog could not be fetched; the form is not rendered
    #[error("{0}")]
    Load(String),
    /// Submission failed; the form stays and save can be retried
    #[error("{0}")]
    Save(String),
}
