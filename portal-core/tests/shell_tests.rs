#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for `PortalShell` built from the default `PortalConfig`.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use portal_core::services::{PortalShell, ShellOptions, ShellView};
use portal_core::traits::{
    ConfiguredCredentialVerifier, CredentialVerifier, ExternalNavigator, VerificationError,
};
use portal_core::types::{Identity, PortalConfig, SessionStatus};
use portal_core::{PortalError, ServiceContext};

// ===== Mock Implementations =====

#[derive(Default)]
struct CapturingNavigator {
    urls: Mutex<Vec<String>>,
}

impl CapturingNavigator {
    fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

impl ExternalNavigator for CapturingNavigator {
    fn open_external(&self, url: &str) {
        self.urls.lock().unwrap().push(url.to_string());
    }
}

/// Verifier that never answers in time
struct HangingVerifier;

#[async_trait]
impl CredentialVerifier for HangingVerifier {
    async fn verify(&self, _username: &str, _password: &str) -> Result<Identity, VerificationError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Err(VerificationError::Unavailable("unreachable".into()))
    }
}

// ===== Helpers =====

fn default_shell() -> (PortalShell, Arc<CapturingNavigator>) {
    let config = PortalConfig::default();
    let content = config.to_content().expect("default catalog must be valid");
    let navigator = Arc::new(CapturingNavigator::default());
    let verifier = Arc::new(ConfiguredCredentialVerifier::new(config.accounts.clone()));

    let ctx = Arc::new(ServiceContext::new(verifier, navigator.clone()));
    let shell = PortalShell::new(Arc::new(content), ctx, ShellOptions::from_config(&config));
    (shell, navigator)
}

fn first_card(shell: &PortalShell, launchable: bool) -> usize {
    let ShellView::Catalog(view) = shell.view() else {
        panic!("catalog not visible");
    };
    view.cards
        .iter()
        .position(|c| c.state.is_launchable() == launchable)
        .expect("no matching card")
}

// ===== Tests =====

#[tokio::test]
async fn sign_in_then_launch_an_application() {
    let (mut shell, navigator) = default_shell();
    assert!(matches!(shell.view(), ShellView::Login(_)));

    let pending = shell.begin_login("admin", "admin").unwrap();
    assert_eq!(shell.session().status(), SessionStatus::Authenticating);
    assert!(shell.complete_login(pending.run().await));

    assert_eq!(shell.session().status(), SessionStatus::LoggedIn);
    assert!(shell.session().last_error().is_none());

    let index = first_card(&shell, true);
    shell.activate_card(index).unwrap();
    assert_eq!(navigator.urls().len(), 1);
}

#[tokio::test]
async fn wrong_password_stays_on_login() {
    let (mut shell, navigator) = default_shell();

    let err = shell.login("admin", "wrong").await.unwrap_err();
    assert_eq!(err, PortalError::InvalidCredentials);
    assert!(shell.session().identity().is_none());

    let ShellView::Login(login) = shell.view() else {
        panic!("catalog must stay hidden after a failed sign-in");
    };
    assert!(!login.last_error.unwrap().is_empty());
    assert!(navigator.urls().is_empty());
}

#[tokio::test]
async fn disabled_application_opens_nothing() {
    let (mut shell, navigator) = default_shell();
    shell.login("admin", "admin").await.unwrap();

    let index = first_card(&shell, false);
    assert!(matches!(
        shell.activate_card(index),
        Err(PortalError::CardDisabled(_))
    ));
    assert!(navigator.urls().is_empty());
}

#[tokio::test]
async fn qr_modal_can_be_reopened_after_closing() {
    let (mut shell, _) = default_shell();
    shell.login("admin", "admin").await.unwrap();

    shell.open_qr();
    shell.close_qr();
    assert!(!shell.qr().is_open());

    shell.open_qr();
    let ShellView::Catalog(view) = shell.view() else {
        panic!("catalog not visible");
    };
    assert!(view.qr_open);
    assert!(!view.access_url.is_empty());
}

#[tokio::test(start_paused = true)]
async fn hanging_verifier_times_out() {
    let config = PortalConfig::default();
    let ctx = Arc::new(ServiceContext::new(
        Arc::new(HangingVerifier),
        Arc::new(CapturingNavigator::default()),
    ));
    let mut shell = PortalShell::new(
        Arc::new(config.to_content().unwrap()),
        ctx,
        ShellOptions {
            gated: true,
            verification_timeout: Duration::from_millis(500),
        },
    );

    let err = shell.login("admin", "admin").await.unwrap_err();
    assert_eq!(err, PortalError::VerificationTimeout);
    assert_eq!(shell.session().status(), SessionStatus::LoggedOut);
    assert!(!shell.session().is_busy());
}

#[tokio::test(start_paused = true)]
async fn abandoned_login_does_not_block_retry() {
    let config = PortalConfig::default();
    let ctx = Arc::new(ServiceContext::new(
        Arc::new(HangingVerifier),
        Arc::new(CapturingNavigator::default()),
    ));
    let mut shell = PortalShell::new(
        Arc::new(config.to_content().unwrap()),
        ctx,
        ShellOptions {
            gated: true,
            verification_timeout: Duration::from_secs(10),
        },
    );

    let abandoned = tokio::time::timeout(Duration::from_secs(1), shell.login("admin", "admin")).await;
    assert!(abandoned.is_err());

    tokio::time::advance(Duration::from_secs(60)).await;
    assert_eq!(shell.session().status(), SessionStatus::LoggedOut);
    assert!(shell.begin_login("admin", "admin").is_ok());
    assert_eq!(shell.session().status(), SessionStatus::Authenticating);
}

#[tokio::test]
async fn ungated_config_shows_catalog_immediately() {
    let config = PortalConfig {
        require_login: false,
        ..PortalConfig::default()
    };
    let ctx = Arc::new(ServiceContext::new(
        Arc::new(ConfiguredCredentialVerifier::new(Vec::new())),
        Arc::new(CapturingNavigator::default()),
    ));
    let shell = PortalShell::new(
        Arc::new(config.to_content().unwrap()),
        ctx,
        ShellOptions::from_config(&config),
    );

    let ShellView::Catalog(view) = shell.view() else {
        panic!("ungated shell must show the catalog");
    };
    assert_eq!(view.cards.len(), config.catalog.len());
    assert!(view.identity.is_none());
}
