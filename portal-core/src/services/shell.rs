//! Portal shell: session, catalog and overlays composed into one screen

use std::sync::Arc;
use std::time::Duration;

use crate::error::{PortalError, PortalResult};
use crate::types::{AlertItem, DocumentLink, Identity, PortalConfig, PortalContent, ResolvedCard};

use super::card_resolver::{resolve, resolve_all};
use super::overlay::{OverlayController, OverlayKind};
use super::session_service::{PendingVerification, PortalSession, VerificationOutcome};
use super::ServiceContext;

/// Shell construction options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellOptions {
    /// Show the login surface until a user is signed in
    pub gated: bool,
    /// Upper bound for one verifier call
    pub verification_timeout: Duration,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            gated: true,
            verification_timeout: Duration::from_secs(5),
        }
    }
}

impl ShellOptions {
    pub fn from_config(config: &PortalConfig) -> Self {
        Self {
            gated: config.require_login,
            verification_timeout: config.verification_timeout(),
        }
    }
}

/// Login surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginView<'a> {
    pub last_error: Option<&'a str>,
    pub authenticating: bool,
}

/// Catalog surface, cards in declaration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogView<'a> {
    /// `None` on ungated shells without a signed-in user
    pub identity: Option<&'a Identity>,
    pub cards: Vec<ResolvedCard<'a>>,
    pub alerts: &'a [AlertItem],
    pub documents: &'a [DocumentLink],
    pub menu_open: bool,
    pub qr_open: bool,
    pub access_url: &'a str,
}

/// What the shell currently renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellView<'a> {
    Login(LoginView<'a>),
    Catalog(CatalogView<'a>),
}

pub struct PortalShell {
    content: Arc<PortalContent>,
    ctx: Arc<ServiceContext>,
    session: PortalSession,
    menu: OverlayController,
    qr: OverlayController,
    gated: bool,
}

impl PortalShell {
    #[must_use]
    pub fn new(content: Arc<PortalContent>, ctx: Arc<ServiceContext>, options: ShellOptions) -> Self {
        let session = PortalSession::new(Arc::clone(&ctx.verifier), options.verification_timeout);
        log::debug!(
            "Portal shell created with {} catalog entries (gated: {})",
            content.catalog.len(),
            options.gated
        );

        Self {
            content,
            ctx,
            session,
            menu: OverlayController::new(OverlayKind::MobileMenu),
            qr: OverlayController::new(OverlayKind::QrAccess),
            gated: options.gated,
        }
    }

    pub fn session(&self) -> &PortalSession {
        &self.session
    }

    pub fn content(&self) -> &PortalContent {
        &self.content
    }

    pub fn menu(&self) -> &OverlayController {
        &self.menu
    }

    pub fn qr(&self) -> &OverlayController {
        &self.qr
    }

    pub fn is_gated(&self) -> bool {
        self.gated
    }

    pub fn is_catalog_visible(&self) -> bool {
        !self.gated || self.session.status().is_logged_in()
    }

    pub fn view(&self) -> ShellView<'_> {
        if !self.is_catalog_visible() {
            return ShellView::Login(LoginView {
                last_error: self.session.last_error(),
                authenticating: self.session.is_busy(),
            });
        }

        ShellView::Catalog(CatalogView {
            identity: self.session.identity(),
            cards: resolve_all(&self.content.catalog),
            alerts: &self.content.alerts,
            documents: &self.content.documents,
            menu_open: self.menu.is_open(),
            qr_open: self.qr.is_open(),
            access_url: &self.content.access_url,
        })
    }

    // ===== Session =====

    pub fn begin_login(
        &mut self,
        username: &str,
        password: &str,
    ) -> PortalResult<PendingVerification> {
        self.session.begin_submit(username, password)
    }

    pub fn complete_login(&mut self, outcome: VerificationOutcome) -> bool {
        self.session.complete_submit(outcome)
    }

    pub fn cancel_login(&mut self) -> bool {
        self.session.cancel_pending()
    }

    pub async fn login(&mut self, username: &str, password: &str) -> PortalResult<()> {
        self.session.submit(username, password).await
    }

    /// Sign out and close every overlay
    pub fn logout(&mut self) -> bool {
        let signed_out = self.session.logout();
        if signed_out {
            self.dismiss_overlays();
        }
        signed_out
    }

    // ===== Catalog =====

    /// Launch the card at `index`
    ///
    /// Disabled cards are a no-op reported as `CardDisabled`; nothing is opened.
    pub fn activate_card(&self, index: usize) -> PortalResult<()> {
        self.ensure_catalog_visible()?;

        let entry = self
            .content
            .catalog
            .get(index)
            .ok_or(PortalError::CardNotFound(index))?;
        let state = resolve(entry);

        match state.launcher() {
            Some(launcher) => {
                launcher.activate(self.ctx.navigator.as_ref());
                Ok(())
            }
            None => {
                log::debug!("Card '{}' is disabled, activation ignored", entry.id);
                Err(PortalError::CardDisabled(entry.title.clone()))
            }
        }
    }

    /// Open the sidebar document at `index`, if it has a link
    pub fn open_document(&self, index: usize) -> PortalResult<()> {
        self.ensure_catalog_visible()?;

        let document = self
            .content
            .documents
            .get(index)
            .ok_or_else(|| PortalError::DocumentUnavailable(format!("#{index}")))?;
        let destination = document
            .destination()
            .ok_or_else(|| PortalError::DocumentUnavailable(document.title.clone()))?;

        log::info!("Opening document '{}'", document.title);
        self.ctx.navigator.open_external(destination);
        Ok(())
    }

    fn ensure_catalog_visible(&self) -> PortalResult<()> {
        if self.is_catalog_visible() {
            Ok(())
        } else {
            Err(PortalError::SignInRequired)
        }
    }

    // ===== Overlays =====

    pub fn toggle_menu(&mut self) {
        self.menu.toggle();
    }

    pub fn close_menu(&mut self) {
        self.menu.close();
    }

    /// Open the QR modal; the mobile menu is closed underneath it
    pub fn open_qr(&mut self) {
        self.menu.close();
        self.qr.open();
    }

    pub fn close_qr(&mut self) {
        self.qr.close();
    }

    pub fn toggle_qr(&mut self) {
        if self.qr.is_open() {
            self.close_qr();
        } else {
            self.open_qr();
        }
    }

    /// Close whatever is open; returns whether anything was
    pub fn dismiss_overlays(&mut self) -> bool {
        let any_open = self.menu.is_open() || self.qr.is_open();
        self.qr.close();
        self.menu.close();
        any_open
    }
}
