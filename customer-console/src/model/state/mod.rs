//! 页面数据状态
//!
//! - `form`：客户表单（输入与单条结果）
//! - `results`：结果表格与行操作
//! - `status`：消息通道
//! - `modal`：详情 / 帮助弹窗
//! - `requests`：在途请求票据与按客户加锁

mod form;
mod modal;
mod requests;
mod results;
mod status;

pub use form::{CustomerForm, FormField};
pub use modal::{Modal, ModalState};
pub use requests::{RequestTracker, Ticket};
pub use results::{ResultRow, ResultsState, RowControls};
pub use status::{MessageChannel, MessageKind, StatusMessage};
