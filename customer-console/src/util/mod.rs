//! Util 层：终端初始化、恢复与 panic 处理

mod terminal;

pub use terminal::{Term, init_terminal, install_panic_hook, restore_terminal};
