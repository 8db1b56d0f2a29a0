//! 浮层更新逻辑

use crate::message::OverlayMessage;
use crate::model::App;

pub fn update(app: &mut App, msg: OverlayMessage) {
    if !app.shell.is_catalog_visible() {
        return;
    }

    match msg {
        OverlayMessage::ToggleMenu => app.shell.toggle_menu(),
        OverlayMessage::OpenQr => {
            app.shell.open_qr();
            if app.access_qr.is_none() {
                app.set_status("QR code unavailable, showing the link only");
            }
        }
        OverlayMessage::CloseQr => app.shell.close_qr(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_app;

    #[test]
    fn qr_replaces_menu_and_can_reopen() {
        let mut app = test_app(false);

        update(&mut app, OverlayMessage::ToggleMenu);
        update(&mut app, OverlayMessage::OpenQr);
        assert!(app.shell.qr().is_open());
        assert!(!app.shell.menu().is_open());

        update(&mut app, OverlayMessage::CloseQr);
        assert!(!app.shell.qr().is_open());

        update(&mut app, OverlayMessage::OpenQr);
        assert!(app.shell.qr().is_open());
    }

    #[test]
    fn missing_qr_image_is_reported() {
        let mut app = test_app(false);
        update(&mut app, OverlayMessage::OpenQr);
        assert!(app.status_message.is_some());

        let mut app = test_app(false);
        app.access_qr = Some("▀▄".to_string());
        update(&mut app, OverlayMessage::OpenQr);
        assert!(app.status_message.is_none());
    }

    #[test]
    fn overlays_stay_closed_on_login_surface() {
        let mut app = test_app(true);
        update(&mut app, OverlayMessage::OpenQr);
        assert!(!app.shell.qr().is_open());
    }
}
