//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层是 Model 的纯投影：只读取 `&App`，不修改任何状态。
//!
//!     layout.rs               主布局：标题栏 + 表单 | 结果 + 状态栏
//!     panels/form.rs          客户表单
//!     panels/results.rs       结果表格与行按钮
//!     components/statusbar.rs 消息通道与快捷键提示
//!     components/modal.rs     详情 / 帮助弹窗
//!     theme.rs                颜色与样式
//!

mod components;
mod layout;
mod panels;
pub mod theme;

pub use layout::render;
