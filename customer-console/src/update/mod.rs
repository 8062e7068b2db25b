//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层是唯一可以修改 Model 的地方。
//! 需要访问服务时，它不直接发起网络调用，而是返回一个 `ApiRequest`
//! 交给主循环派发给 Backend 层。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod form;           // 表单编辑
//!         mod results;        // 结果表格选择
//!         mod modal;          // 弹窗
//!         mod operations;     // 操作派发：校验、加锁、领取票据
//!         mod completion;     // 请求完成：写表单、写表格、写消息
//!
//!         pub fn update(app: &mut App, msg: AppMessage) -> Option<ApiRequest>
//!

mod completion;
mod form;
mod modal;
mod operations;
mod results;

use crate::backend::ApiRequest;
use crate::message::AppMessage;
use crate::model::App;

/// 处理应用消息，更新状态；需要访问服务时返回待派发的请求
pub fn update(app: &mut App, msg: AppMessage) -> Option<ApiRequest> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }
        AppMessage::ToggleFocus => {
            app.focus = app.focus.toggle();
        }
        AppMessage::Form(form_msg) => form::update(app, form_msg),
        AppMessage::Results(results_msg) => results::update(app, results_msg),
        AppMessage::Modal(modal_msg) => modal::update(app, modal_msg),
        AppMessage::Operation(operation) => return operations::dispatch(app, operation),
        AppMessage::Completed(completion) => completion::apply(app, completion),
        AppMessage::ClearForm => {
            app.messages.clear();
            app.form.clear();
            app.form.clear_identity();
        }
        AppMessage::ShowHelp => {
            app.modal.show_help();
        }
        AppMessage::Noop => {}
    }
    None
}
