//! 请求与完成结果

use customer_client::{
    ClientError, Customer, CustomerId, CustomerUpdate, LifecycleAction, NewCustomer, SearchFilter,
};

use crate::model::Ticket;

/// 待执行的服务调用
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestKind {
    Create(NewCustomer),
    List,
    Search(SearchFilter),
    Retrieve(CustomerId),
    Update(CustomerId, CustomerUpdate),
    Delete(CustomerId),
    Details(CustomerId),
    Transition(CustomerId, LifecycleAction),
}

impl RequestKind {
    /// 派发时即占有表单
    ///
    /// 搜索不在此列：只有命中时才回填表单，届时再决定是否占有。
    pub fn writes_form(&self) -> bool {
        matches!(
            self,
            Self::Create(_) | Self::Retrieve(_) | Self::Update(..) | Self::Delete(_)
        )
    }

    /// 完成后是否替换结果表格
    pub fn writes_results(&self) -> bool {
        matches!(self, Self::List | Self::Search(_))
    }

    /// 修改类请求所针对的客户（需要加锁）
    pub fn locked_identity(&self) -> Option<&CustomerId> {
        match self {
            Self::Update(id, _) | Self::Delete(id) | Self::Transition(id, _) => Some(id),
            _ => None,
        }
    }
}

/// 带票据的请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub ticket: Ticket,
    pub kind: RequestKind,
}

/// 服务调用的结果
#[derive(Debug, Clone)]
pub enum Outcome {
    Created(Result<Customer, ClientError>),
    Listed(Result<Vec<Customer>, ClientError>),
    Searched(Result<Vec<Customer>, ClientError>),
    Retrieved(Result<Customer, ClientError>),
    Updated {
        id: CustomerId,
        result: Result<Customer, ClientError>,
    },
    Deleted {
        id: CustomerId,
        result: Result<(), ClientError>,
    },
    Details(Result<Customer, ClientError>),
    Transitioned {
        id: CustomerId,
        action: LifecycleAction,
        result: Result<(), ClientError>,
    },
}

/// 完成的请求
#[derive(Debug, Clone)]
pub struct Completion {
    pub ticket: Ticket,
    pub outcome: Outcome,
}

impl Completion {
    /// 请求未能执行完毕时的失败结果，保证锁照常释放
    pub fn failed(request: ApiRequest, err: ClientError) -> Self {
        let ApiRequest { ticket, kind } = request;
        let outcome = match kind {
            RequestKind::Create(_) => Outcome::Created(Err(err)),
            RequestKind::List => Outcome::Listed(Err(err)),
            RequestKind::Search(_) => Outcome::Searched(Err(err)),
            RequestKind::Retrieve(_) => Outcome::Retrieved(Err(err)),
            RequestKind::Update(id, _) => Outcome::Updated { id, result: Err(err) },
            RequestKind::Delete(id) => Outcome::Deleted { id, result: Err(err) },
            RequestKind::Details(_) => Outcome::Details(Err(err)),
            RequestKind::Transition(id, action) => Outcome::Transitioned {
                id,
                action,
                result: Err(err),
            },
        };
        Self { ticket, outcome }
    }
}
