//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的“唯一真相来源”。
//! 所有状态变更都通过 Update 层来触发，View 层只读取。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（Form / Results）
//!
//!         pub mod domain;     // 字段取值约定（激活文本、性别选项）
//!         pub mod state;      // 表单、结果、消息、弹窗、在途请求
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         pub struct App {
//!             pub should_quit: bool,              // 退出标志
//!             pub focus: FocusPanel,              // 当前焦点
//!             pub form: CustomerForm,             // 客户表单
//!             pub results: ResultsState,          // 结果表格
//!             pub messages: MessageChannel,       // 状态栏消息
//!             pub modal: ModalState,              // 弹窗
//!             pub requests: RequestTracker,       // 在途请求
//!         }
//!
//!     数据流：
//!         用户按 Alt+r（查询）
//!             ↓
//!         event/handler.rs 返回 AppMessage::Operation(Operation::Retrieve)
//!             ↓
//!         update/operations.rs 检查 ID、领取票据，返回 ApiRequest
//!             ↓
//!         backend 在 tokio 运行时执行请求，经 mpsc 送回 AppMessage::Completed
//!             ↓
//!         update/completion.rs 写入表单与消息通道
//!

mod app;
mod focus;

pub mod domain;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use state::{
    CustomerForm, FormField, MessageChannel, MessageKind, Modal, ModalState, RequestTracker,
    ResultRow, ResultsState, RowControls, StatusMessage, Ticket,
};
