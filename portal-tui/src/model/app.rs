//! 应用主状态结构

use portal_core::services::{PendingVerification, PortalShell};

use super::{FocusPanel, GridSelection, ListSelection, LoginForm, ModalState};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 门户（会话、目录、浮层）
    pub shell: PortalShell,

    /// 登录表单
    pub login: LoginForm,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 目录卡片选中位置
    pub cards: GridSelection,

    /// 文档选中位置
    pub documents: ListSelection,

    /// 弹窗状态
    pub modal: ModalState,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 移动端访问二维码（预先渲染）
    pub access_qr: Option<String>,

    /// 等待主循环派发的验证请求
    pending: Option<PendingVerification>,
}

impl App {
    /// 创建新的应用实例
    pub fn new(shell: PortalShell, access_qr: Option<String>) -> Self {
        let cards = GridSelection::new(shell.content().catalog.len());
        let documents = ListSelection::new(shell.content().documents.len());

        Self {
            should_quit: false,
            shell,
            login: LoginForm::default(),
            focus: FocusPanel::default(),
            cards,
            documents,
            modal: ModalState::new(),
            status_message: None,
            access_qr,
            pending: None,
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// 登记一个待执行的验证请求
    pub fn queue_verification(&mut self, pending: PendingVerification) {
        self.pending = Some(pending);
    }

    /// 取出待执行的验证请求（由主循环调用）
    pub fn take_pending(&mut self) -> Option<PendingVerification> {
        self.pending.take()
    }

    /// 回到初始的界面状态（退出登录后）
    pub fn reset_navigation(&mut self) {
        self.login = LoginForm::default();
        self.focus = FocusPanel::default();
        self.cards.select_first();
        self.documents.select_first();
    }
}
