//! 应用主状态结构

use super::{CustomerForm, FocusPanel, MessageChannel, ModalState, RequestTracker, ResultsState};

/// 应用主状态
#[derive(Debug, Default)]
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 客户表单
    pub form: CustomerForm,

    /// 结果表格
    pub results: ResultsState,

    /// 消息通道
    pub messages: MessageChannel,

    /// 弹窗状态
    pub modal: ModalState,

    /// 在途请求
    pub requests: RequestTracker,
}

impl App {
    /// 创建新的应用实例
    pub fn new() -> Self {
        Self::default()
    }
}
