//! 会话相关类型定义

use serde::{Deserialize, Serialize};

/// 会话状态
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum SessionStatus {
    /// 未登录
    #[default]
    LoggedOut,
    /// 正在验证凭证
    Authenticating,
    /// 已登录
    LoggedIn,
}

impl SessionStatus {
    /// 是否已登录
    pub fn is_logged_in(self) -> bool {
        matches!(self, Self::LoggedIn)
    }
}

/// 登录用户的身份信息
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// 显示名称
    pub display_name: String,
    /// 角色标签
    pub role: String,
}

impl Identity {
    pub fn new(display_name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            role: role.into(),
        }
    }

    /// 头像用的首字母
    pub fn initials(&self) -> String {
        self.display_name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}
