//!
//! app.rs
//! 应用主循环
//!
//! loop {
//!     terminal.draw(|f| view::render(&app, f))     // 渲染 UI
//!     if app.should_quit { break }
//!     poll_event() → handle_event() → update()      // 最多等待 100ms
//!     take_pending() → runtime.spawn(run)           // 派发登录验证
//!     rx.try_recv() → VerificationFinished          // 应用已完成的验证
//! }
//!
//! 验证在 tokio 运行时上执行，主循环不等待它，因此验证期间界面持续显示
//! "Signing in..." 且可以用 Esc 取消。

use std::time::Duration;

use anyhow::Result;
use portal_core::services::VerificationOutcome;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App, runtime: &Handle) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<VerificationOutcome>();

    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 轮询事件（100ms 超时）并更新状态
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }

        // 4. 派发新的验证请求
        if let Some(pending) = app.take_pending() {
            let tx = tx.clone();
            runtime.spawn(async move {
                let attempt = pending.attempt();
                let outcome = pending.run().await;
                if tx.send(outcome).is_err() {
                    tracing::debug!("UI loop gone, dropping outcome of attempt {attempt}");
                }
            });
        }

        // 5. 应用已完成的验证结果
        while let Ok(outcome) = rx.try_recv() {
            update::update(app, AppMessage::VerificationFinished(outcome));
        }
    }

    Ok(())
}
