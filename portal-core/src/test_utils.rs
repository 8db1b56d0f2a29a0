//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::services::{PortalShell, ServiceContext, ShellOptions};
use crate::traits::{CredentialVerifier, ExternalNavigator, VerificationError};
use crate::types::{Catalog, CatalogEntry, Identity, PortalContent};

// ===== MockCredentialVerifier =====

pub struct MockCredentialVerifier {
    /// 接受的用户名/密码；None 表示一律拒绝
    accepted: Option<(String, String)>,
    /// 如果 Some，verify 时返回此错误（模拟服务故障）
    failure: Option<VerificationError>,
    /// 模拟网络延迟
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl MockCredentialVerifier {
    pub fn accepting(username: &str, password: &str) -> Self {
        Self {
            accepted: Some((username.to_string(), password.to_string())),
            failure: None,
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn unavailable(reason: &str) -> Self {
        Self {
            accepted: None,
            failure: Some(VerificationError::Unavailable(reason.to_string())),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CredentialVerifier for MockCredentialVerifier {
    async fn verify(&self, username: &str, password: &str) -> Result<Identity, VerificationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(ref err) = self.failure {
            return Err(err.clone());
        }

        match self.accepted {
            Some((ref u, ref p)) if u == username && p == password => {
                Ok(Identity::new("Admin User", "Admin"))
            }
            _ => Err(VerificationError::InvalidCredentials),
        }
    }
}

// ===== RecordingNavigator =====

#[derive(Default)]
pub struct RecordingNavigator {
    opened: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

impl ExternalNavigator for RecordingNavigator {
    fn open_external(&self, url: &str) {
        self.opened.lock().unwrap().push(url.to_string());
    }
}

// ===== 工厂方法 =====

/// 两个条目的目录：一个可启动，一个未开放
pub fn test_catalog() -> Catalog {
    Catalog::new(vec![
        CatalogEntry::launchable("audit", "Audit", "Inspections", "https://audit.example"),
        CatalogEntry {
            destination: Some("https://fleet.example".to_string()),
            ..CatalogEntry::unavailable("fleet", "Fleet", "Vehicles")
        },
    ])
    .unwrap()
}

/// 创建测试用 shell，返回 (shell, verifier, navigator)
pub fn create_test_shell(
    gated: bool,
) -> (PortalShell, Arc<MockCredentialVerifier>, Arc<RecordingNavigator>) {
    let verifier = Arc::new(MockCredentialVerifier::accepting("admin", "admin"));
    let navigator = Arc::new(RecordingNavigator::new());

    let ctx = Arc::new(ServiceContext::new(verifier.clone(), navigator.clone()));
    let mut content = PortalContent::with_catalog(test_catalog());
    content.access_url = "https://portal.example".to_string();

    let shell = PortalShell::new(
        Arc::new(content),
        ctx,
        ShellOptions {
            gated,
            verification_timeout: Duration::from_secs(5),
        },
    );

    (shell, verifier, navigator)
}
