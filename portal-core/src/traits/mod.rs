//! 外部协作者抽象 trait 定义

mod credential_verifier;
mod navigator;

pub use credential_verifier::{ConfiguredCredentialVerifier, CredentialVerifier, VerificationError};
pub use navigator::ExternalNavigator;
