//! 表单消息类型

/// 表单编辑消息
#[derive(Debug, Clone)]
pub enum FormMessage {
    /// 下一个字段
    NextField,

    /// 上一个字段
    PrevField,

    /// 输入字符
    Input(char),

    /// 删除字符（Backspace）
    Backspace,

    /// 选择器：下一个选项
    NextOption,

    /// 选择器：上一个选项
    PrevOption,
}
