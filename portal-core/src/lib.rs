//! Noval Portal Core Library
//!
//! Provides core logic for the Noval application portal, including:
//! - Session gate (login state machine over an injected credential verifier)
//! - Catalog card resolution and activation
//! - Overlay lifecycle (mobile menu, QR access modal)
//! - Shell composition of the above into a renderable view
//!
//! This library is front-end independent; the verifier and external navigation are
//! abstracted through traits and injected by the platform layer.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{PortalError, PortalResult};
pub use services::ServiceContext;
pub use traits::{CredentialVerifier, ExternalNavigator};
