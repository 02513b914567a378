use thiserror::Error;

/// Errors raised by catalog lookups.
///
/// The computation paths (rating, matching, assignment, standings) are
/// total functions and never return `Err`: unknown positions fall back
/// to a generic profile, empty inputs yield empty results.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Unknown formation: {0}")]
    UnknownFormation(String),

    #[error("Unknown modality: {0}")]
    UnknownModality(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
