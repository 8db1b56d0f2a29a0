//! 凭证验证器抽象 Trait

use async_trait::async_trait;
use thiserror::Error;

use crate::error::PortalError;
use crate::types::{AccountRecord, Identity};

/// 验证失败
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerificationError {
    /// 用户名或密码错误
    #[error("invalid credentials")]
    InvalidCredentials,
    /// 验证服务不可用
    #[error("verifier unavailable: {0}")]
    Unavailable(String),
}

impl From<VerificationError> for PortalError {
    fn from(err: VerificationError) -> Self {
        match err {
            VerificationError::InvalidCredentials => Self::InvalidCredentials,
            VerificationError::Unavailable(reason) => Self::VerifierUnavailable(reason),
        }
    }
}

/// 凭证验证器 Trait
///
/// 门户只依赖这一能力，不关心背后的认证服务。实现可以是：
/// - `ConfiguredCredentialVerifier`：配置文件中的账户表（演示用替身）
/// - 任何远程认证服务的客户端
///
/// 调用方负责超时控制，实现无需自行限时。
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// 验证凭证
    ///
    /// # Returns
    /// * `Ok(identity)` - 验证通过
    /// * `Err(InvalidCredentials)` - 凭证错误
    /// * `Err(Unavailable)` - 服务故障
    async fn verify(&self, username: &str, password: &str) -> Result<Identity, VerificationError>;
}

/// 基于配置账户表的验证器
pub struct ConfiguredCredentialVerifier {
    accounts: Vec<AccountRecord>,
}

impl ConfiguredCredentialVerifier {
    #[must_use]
    pub fn new(accounts: Vec<AccountRecord>) -> Self {
        if accounts.is_empty() {
            log::warn!("No accounts configured, every sign-in attempt will be rejected");
        }
        Self { accounts }
    }
}

#[async_trait]
impl CredentialVerifier for ConfiguredCredentialVerifier {
    async fn verify(&self, username: &str, password: &str) -> Result<Identity, VerificationError> {
        self.accounts
            .iter()
            .find(|a| a.username == username && a.password == password)
            .map(|a| Identity::new(a.display_name.clone(), a.role.clone()))
            .ok_or(VerificationError::InvalidCredentials)
    }
}
