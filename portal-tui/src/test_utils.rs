//! 测试辅助模块

use std::sync::{Arc, Mutex};
use std::time::Duration;

use portal_core::services::{PortalShell, ShellOptions};
use portal_core::traits::ConfiguredCredentialVerifier;
use portal_core::types::{AccountRecord, Catalog, CatalogEntry, DocumentLink, PortalContent};
use portal_core::{ExternalNavigator, ServiceContext};

use crate::model::App;

/// 记录打开过的地址
#[derive(Default)]
pub struct RecordingNavigator {
    opened: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

impl ExternalNavigator for RecordingNavigator {
    fn open_external(&self, url: &str) {
        self.opened.lock().unwrap().push(url.to_string());
    }
}

/// 三个应用（第二个未开放）、两个文档（第一个有链接）
fn test_content() -> PortalContent {
    let catalog = Catalog::new(vec![
        CatalogEntry::launchable("audit", "Audit", "Inspections", "https://audit.example"),
        CatalogEntry::unavailable("fleet", "Fleet", "Vehicles"),
        CatalogEntry::launchable("stock", "Stock", "Warehouse", "https://stock.example"),
    ])
    .unwrap();

    PortalContent {
        catalog,
        alerts: Vec::new(),
        documents: vec![
            DocumentLink {
                title: "Handbook".to_string(),
                size_label: "2.4 MB".to_string(),
                destination: Some("https://docs.example/handbook.pdf".to_string()),
            },
            DocumentLink {
                title: "Calendar".to_string(),
                size_label: "0.5 MB".to_string(),
                destination: None,
            },
        ],
        access_url: "https://portal.example".to_string(),
    }
}

/// 创建测试用 App 及其导航器，接受 `admin` / `admin`
pub fn test_app_with_navigator(gated: bool) -> (App, Arc<RecordingNavigator>) {
    let verifier = Arc::new(ConfiguredCredentialVerifier::new(vec![AccountRecord {
        username: "admin".to_string(),
        password: "admin".to_string(),
        display_name: "Admin User".to_string(),
        role: "Admin".to_string(),
    }]));
    let navigator = Arc::new(RecordingNavigator::default());

    let ctx = Arc::new(ServiceContext::new(verifier, navigator.clone()));
    let shell = PortalShell::new(
        Arc::new(test_content()),
        ctx,
        ShellOptions {
            gated,
            verification_timeout: Duration::from_secs(5),
        },
    );

    (App::new(shell, None), navigator)
}

pub fn test_app(gated: bool) -> App {
    test_app_with_navigator(gated).0
}
