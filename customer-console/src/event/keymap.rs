//! 快捷键配置

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::alt(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::alt(KeyCode::Char('h'));
    pub const HELP_F1: KeyBinding = KeyBinding::key(KeyCode::F(1));
    pub const CLOSE: KeyBinding = KeyBinding::key(KeyCode::Esc);
    pub const TOGGLE_FOCUS: KeyBinding = KeyBinding::key(KeyCode::Tab);

    // 服务操作
    pub const CREATE: KeyBinding = KeyBinding::alt(KeyCode::Char('c'));
    pub const LIST: KeyBinding = KeyBinding::alt(KeyCode::Char('l'));
    pub const SEARCH: KeyBinding = KeyBinding::alt(KeyCode::Char('s'));
    pub const RETRIEVE: KeyBinding = KeyBinding::alt(KeyCode::Char('r'));
    pub const UPDATE: KeyBinding = KeyBinding::alt(KeyCode::Char('u'));
    pub const DELETE: KeyBinding = KeyBinding::alt(KeyCode::Char('d'));
    pub const CLEAR: KeyBinding = KeyBinding::alt(KeyCode::Char('x'));

    // 结果行操作
    pub const VIEW_DETAILS: KeyBinding = KeyBinding::key(KeyCode::Char('v'));
    pub const ACTIVATE: KeyBinding = KeyBinding::key(KeyCode::Char('a'));
    pub const DEACTIVATE: KeyBinding = KeyBinding::key(KeyCode::Char('d'));
}
