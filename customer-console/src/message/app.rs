//! 应用主消息枚举

use super::{FormMessage, ModalMessage, Operation, ResultsMessage};
use crate::backend::Completion;

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换焦点面板（表单 ↔ 结果）
    ToggleFocus,

    /// 表单相关消息
    Form(FormMessage),

    /// 结果表格相关消息
    Results(ResultsMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 发起一个服务操作
    Operation(Operation),

    /// 后台请求完成
    Completed(Completion),

    /// 清空表单（含 ID）与消息
    ClearForm,

    /// 显示帮助
    ShowHelp,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
