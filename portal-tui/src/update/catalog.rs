//! 目录页面更新逻辑

use crate::message::CatalogMessage;
use crate::model::{App, FocusPanel};

/// 处理目录消息，作用于当前焦点面板
pub fn update(app: &mut App, msg: CatalogMessage) {
    if !app.shell.is_catalog_visible() {
        return;
    }

    match (app.focus, msg) {
        (FocusPanel::Catalog, CatalogMessage::MoveUp) => app.cards.move_up(),
        (FocusPanel::Catalog, CatalogMessage::MoveDown) => app.cards.move_down(),
        (FocusPanel::Catalog, CatalogMessage::MoveLeft) => app.cards.move_left(),
        (FocusPanel::Catalog, CatalogMessage::MoveRight) => app.cards.move_right(),
        (FocusPanel::Catalog, CatalogMessage::SelectFirst) => app.cards.select_first(),
        (FocusPanel::Catalog, CatalogMessage::SelectLast) => app.cards.select_last(),
        (FocusPanel::Catalog, CatalogMessage::Activate) => activate_card(app),

        (FocusPanel::Documents, CatalogMessage::MoveUp | CatalogMessage::MoveLeft) => {
            app.documents.select_previous();
        }
        (FocusPanel::Documents, CatalogMessage::MoveDown | CatalogMessage::MoveRight) => {
            app.documents.select_next();
        }
        (FocusPanel::Documents, CatalogMessage::SelectFirst) => app.documents.select_first(),
        (FocusPanel::Documents, CatalogMessage::SelectLast) => app.documents.select_last(),
        (FocusPanel::Documents, CatalogMessage::Activate) => open_document(app),
    }
}

fn activate_card(app: &mut App) {
    let Some(index) = app.cards.current() else {
        return;
    };

    let result = app.shell.activate_card(index).map(|()| {
        app.shell
            .content()
            .catalog
            .get(index)
            .map(|entry| format!("Opening {} in your browser", entry.title))
            .unwrap_or_default()
    });

    match result {
        Ok(message) => app.set_status(message),
        Err(e) => app.set_status(e.to_string()),
    }
}

fn open_document(app: &mut App) {
    let Some(index) = app.documents.current() else {
        return;
    };

    match app.shell.open_document(index) {
        Ok(()) => app.set_status("Opening document in your browser"),
        Err(e) => app.set_status(e.to_string()),
    }
}
