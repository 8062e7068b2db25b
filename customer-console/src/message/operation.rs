//! 服务操作消息

use customer_client::{CustomerId, LifecycleAction};

/// 需要访问客户服务的用户操作
///
/// 表单类操作在派发时才读取表单内容；行操作携带所在行的 ID。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Create,
    List,
    Search,
    Retrieve,
    Update,
    Delete,

    /// 结果行的“查看详情”
    ViewDetails(CustomerId),

    /// 结果行的“激活 / 停用”
    Transition(CustomerId, LifecycleAction),
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::List => "list",
            Self::Search => "search",
            Self::Retrieve => "retrieve",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::ViewDetails(_) => "details",
            Self::Transition(_, action) => action.verb(),
        }
    }
}
