//! 弹窗状态

use customer_client::Customer;

/// 弹窗类型
#[derive(Debug, Clone)]
pub enum Modal {
    /// 客户详情（只读）
    CustomerDetails { customer: Customer },

    /// 帮助
    Help,
}

/// 弹窗状态管理
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    /// 是否有弹窗打开
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 显示客户详情；已打开的详情会被替换
    pub fn show_details(&mut self, customer: Customer) {
        self.active = Some(Modal::CustomerDetails { customer });
    }

    /// 显示帮助
    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
    }
}
