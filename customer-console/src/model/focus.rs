//! 焦点状态定义

/// 焦点面板枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 左侧客户表单
    #[default]
    Form,
    /// 右侧结果表格
    Results,
}

impl FocusPanel {
    /// 切换到另一个面板
    pub fn toggle(self) -> Self {
        match self {
            FocusPanel::Form => FocusPanel::Results,
            FocusPanel::Results => FocusPanel::Form,
        }
    }

    /// 是否是表单面板
    pub fn is_form(self) -> bool {
        matches!(self, FocusPanel::Form)
    }

    /// 是否是结果面板
    pub fn is_results(self) -> bool {
        matches!(self, FocusPanel::Results)
    }
}
