//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入转换为 Message。
//!
//!     mod handler;        // 事件轮询与按键分发
//!     mod keymap;         // 快捷键映射
//!
//! 分发顺序：
//!     弹窗打开时  → 只处理关闭弹窗的按键
//!     全局快捷键  → 退出、帮助、切换焦点、六个服务操作、清空表单
//!     焦点面板    → 表单编辑 / 结果行选择与行操作
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
