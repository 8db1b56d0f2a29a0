//! 登录表单消息

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginMessage {
    /// 输入字符
    Input(char),
    /// 删除字符
    Backspace,
    /// 切换输入字段
    SwitchField,
    /// 显示 / 隐藏密码
    TogglePasswordVisibility,
    /// 提交
    Submit,
}
