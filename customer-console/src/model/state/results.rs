//! 结果表格状态

use customer_client::{Customer, CustomerId, LifecycleAction, LifecycleState};

/// 一行结果上可用的操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowControls {
    pub view_details: bool,
    pub activate: bool,
    pub deactivate: bool,
}

impl RowControls {
    /// 由生命周期状态推导；激活与停用永远互斥
    pub fn for_state(state: LifecycleState) -> Self {
        Self {
            view_details: true,
            activate: !state.is_active(),
            deactivate: state.is_active(),
        }
    }

    pub fn allows(self, action: LifecycleAction) -> bool {
        match action {
            LifecycleAction::Activate => self.activate,
            LifecycleAction::Deactivate => self.deactivate,
        }
    }
}

/// 表格中的一行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub customer: Customer,
}

impl ResultRow {
    pub fn id(&self) -> &CustomerId {
        &self.customer.id
    }

    pub fn controls(&self) -> RowControls {
        RowControls::for_state(self.customer.lifecycle())
    }
}

/// 结果表格状态
#[derive(Debug, Default)]
pub struct ResultsState {
    /// 服务端返回顺序
    pub rows: Vec<ResultRow>,
    /// 当前选中行
    pub selected: usize,
}

impl ResultsState {
    /// 用新的记录集整体替换表格
    pub fn set_records(&mut self, customers: Vec<Customer>) {
        self.rows = customers
            .into_iter()
            .map(|customer| ResultRow { customer })
            .collect();
        self.selected = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn selected_row(&self) -> Option<&ResultRow> {
        self.rows.get(self.selected)
    }

    pub fn row(&self, id: &CustomerId) -> Option<&ResultRow> {
        self.rows.iter().find(|r| r.id() == id)
    }

    /// 服务端确认状态变更后，只更新 `id` 对应的那一行
    ///
    /// 返回是否找到了该行（表格可能已被新的查询结果替换）。
    pub fn apply_transition(&mut self, id: &CustomerId, action: LifecycleAction) -> bool {
        let Some(row) = self.rows.iter_mut().find(|r| r.id() == id) else {
            return false;
        };
        let next = row
            .customer
            .lifecycle()
            .transition(action)
            .unwrap_or_else(|illegal| {
                log::warn!("Customer {id}: {illegal}; keeping confirmed state");
                action.target()
            });
        row.customer.active = next.is_active();
        true
    }

    // === 选择 ===

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.rows.len() {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.rows.len().saturating_sub(1);
    }
}
