//! 结果表格消息类型

/// 结果表格选择消息
#[derive(Debug, Clone)]
pub enum ResultsMessage {
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,
}
