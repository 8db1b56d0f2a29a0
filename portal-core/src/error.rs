//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum PortalError {
    /// The verifier rejected the username/password pair
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// The verifier did not answer within the configured bound
    #[error("Sign-in timed out, please try again")]
    VerificationTimeout,

    /// The verifier could not be reached
    #[error("Authentication service unavailable: {0}")]
    VerifierUnavailable(String),

    /// Submitted with a blank username
    #[error("Please enter a username")]
    EmptyUsername,

    /// A verification is already in flight for this session
    #[error("A sign-in attempt is already in progress")]
    VerificationInProgress,

    /// Submit issued while a user is signed in
    #[error("Already signed in")]
    AlreadyLoggedIn,

    /// Activation requested for a card that is not launchable
    #[error("Application not available yet: {0}")]
    CardDisabled(String),

    /// Card index outside the catalog
    #[error("No catalog entry at position {0}")]
    CardNotFound(usize),

    /// Catalog actions attempted behind the login gate
    #[error("Please sign in first")]
    SignInRequired,

    /// Document without a destination
    #[error("Document has no link: {0}")]
    DocumentUnavailable(String),

    /// Entry marked available without a destination
    #[error("Malformed catalog entry: {0}")]
    MalformedCatalogEntry(String),

    /// Two catalog entries share an id
    #[error("Duplicate catalog id: {0}")]
    DuplicateCatalogId(String),

    /// Catalog entry with a blank id
    #[error("Catalog entry id must not be empty")]
    EmptyCatalogId,

    /// Configuration could not be read or written
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl PortalError {
    /// Whether it is expected behavior (user input, unavailable cards, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::InvalidCredentials
            | Self::EmptyUsername
            | Self::VerificationInProgress
            | Self::AlreadyLoggedIn
            | Self::CardDisabled(_)
            | Self::CardNotFound(_)
            | Self::SignInRequired
            | Self::DocumentUnavailable(_)
            | Self::MalformedCatalogEntry(_) => true,
            Self::VerificationTimeout
            | Self::VerifierUnavailable(_)
            | Self::DuplicateCatalogId(_)
            | Self::EmptyCatalogId
            | Self::ConfigError(_)
            | Self::SerializationError(_) => false,
        }
    }

    /// Whether the error ends a sign-in attempt and belongs in the login form's error region.
    #[must_use]
    pub fn is_sign_in_failure(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials
                | Self::VerificationTimeout
                | Self::VerifierUnavailable(_)
                | Self::EmptyUsername
        )
    }
}

impl From<serde_json::Error> for PortalError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Core layer Result type alias
pub type PortalResult<T> = std::result::Result<T, PortalError>;
