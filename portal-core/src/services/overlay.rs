//! Overlay lifecycle
//!
//! One controller per transient surface. Controllers are independent; any
//! cross-overlay policy lives in the shell.

use serde::Serialize;

/// Which surface a controller drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum OverlayKind {
    /// Collapsible navigation panel on narrow layouts
    MobileMenu,
    /// Modal showing the mobile access QR code
    QrAccess,
}

impl OverlayKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::MobileMenu => "mobile menu",
            Self::QrAccess => "QR access modal",
        }
    }
}

/// Open/close state of one overlay. Created closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayController {
    kind: OverlayKind,
    is_open: bool,
}

impl OverlayController {
    pub fn new(kind: OverlayKind) -> Self {
        Self {
            kind,
            is_open: false,
        }
    }

    pub fn kind(&self) -> OverlayKind {
        self.kind
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn open(&mut self) {
        if !self.is_open {
            log::debug!("{} opened", self.kind.name());
        }
        self.is_open = true;
    }

    pub fn close(&mut self) {
        if self.is_open {
            log::debug!("{} closed", self.kind.name());
        }
        self.is_open = false;
    }

    pub fn toggle(&mut self) {
        if self.is_open {
            self.close();
        } else {
            self.open();
        }
    }
}
