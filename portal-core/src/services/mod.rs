//! 业务逻辑服务层

mod card_resolver;
mod overlay;
mod session_service;
mod shell;

pub use card_resolver::{resolve, resolve_all, Launcher};
pub use overlay::{OverlayController, OverlayKind};
pub use session_service::{AttemptId, PendingVerification, PortalSession, VerificationOutcome};
pub use shell::{CatalogView, LoginView, PortalShell, ShellOptions, ShellView};

use std::sync::Arc;

use crate::traits::{CredentialVerifier, ExternalNavigator};

/// 服务上下文 - 持有所有外部依赖
///
/// 平台层需要创建此上下文，并注入平台特定的验证器与导航器实现。
pub struct ServiceContext {
    /// 凭证验证器
    pub verifier: Arc<dyn CredentialVerifier>,
    /// 外部地址导航器
    pub navigator: Arc<dyn ExternalNavigator>,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(
        verifier: Arc<dyn CredentialVerifier>,
        navigator: Arc<dyn ExternalNavigator>,
    ) -> Self {
        Self {
            verifier,
            navigator,
        }
    }
}
