//! 登录表单状态

/// 表单字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Password,
}

impl LoginField {
    /// 只有两个字段，前后切换都是翻转
    pub fn other(self) -> Self {
        match self {
            Self::Username => Self::Password,
            Self::Password => Self::Username,
        }
    }
}

/// 登录表单
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub field: LoginField,
    pub show_password: bool,
}

impl LoginForm {
    fn focused_mut(&mut self) -> &mut String {
        match self.field {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }

    pub fn input(&mut self, c: char) {
        self.focused_mut().push(c);
    }

    pub fn backspace(&mut self) {
        self.focused_mut().pop();
    }

    pub fn switch_field(&mut self) {
        self.field = self.field.other();
    }

    pub fn clear_password(&mut self) {
        self.password.clear();
    }

    /// 显示用的密码文本
    pub fn password_display(&self) -> String {
        if self.show_password {
            self.password.clone()
        } else {
            "•".repeat(self.password.chars().count())
        }
    }
}
