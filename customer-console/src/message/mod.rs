//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁。
//! 键盘事件与后台请求的完成结果都被翻译成 AppMessage，
//! Update 层根据 Message 来更新 Model。
//!
//!     app.rs          主消息 AppMessage
//!     form.rs         表单编辑子消息
//!     results.rs      结果表格子消息
//!     modal.rs        弹窗子消息
//!     operation.rs    需要访问服务的操作
//!

mod app;
mod form;
mod modal;
mod operation;
mod results;

pub use app::AppMessage;
pub use form::FormMessage;
pub use modal::ModalMessage;
pub use operation::Operation;
pub use results::ResultsMessage;
