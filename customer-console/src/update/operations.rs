//! 操作派发
//!
//! 读取表单、做存在性检查、为修改类操作加锁，然后领取票据生成请求。
//! 除缺少 ID 外不做任何客户端校验，其余交给服务端判断。

use customer_client::{CustomerId, CustomerUpdate};

use crate::backend::{ApiRequest, RequestKind};
use crate::message::Operation;
use crate::model::App;

pub const ID_REQUIRED: &str = "Customer id is required";

fn busy(id: &CustomerId) -> String {
    format!("A request for customer {id} is already in progress")
}

pub fn dispatch(app: &mut App, operation: Operation) -> Option<ApiRequest> {
    // 行操作：按钮被禁用时不产生任何效果
    if let Operation::Transition(id, action) = &operation {
        let enabled = app
            .results
            .row(id)
            .is_some_and(|row| row.controls().allows(*action));
        if !enabled {
            log::debug!("Ignoring {} for customer {id}: control disabled", action.verb());
            return None;
        }
    }

    app.messages.clear();
    let name = operation.name();

    let kind = match operation {
        Operation::Create => RequestKind::Create(app.form.read()),
        Operation::List => RequestKind::List,
        Operation::Search => RequestKind::Search(app.form.search_filter()),
        Operation::Retrieve => RequestKind::Retrieve(require_identity(app)?),
        Operation::Update => {
            let id = require_identity(app)?;
            RequestKind::Update(id, CustomerUpdate::from(app.form.read()))
        }
        Operation::Delete => RequestKind::Delete(require_identity(app)?),
        Operation::ViewDetails(id) => RequestKind::Details(id),
        Operation::Transition(id, action) => RequestKind::Transition(id, action),
    };

    if let Some(id) = kind.locked_identity()
        && !app.requests.try_lock(id)
    {
        log::info!("Request for customer {id} blocked: another one is in flight");
        app.messages.error(busy(id));
        return None;
    }

    let ticket = app.requests.issue();
    if kind.writes_form() {
        app.requests.claim_form(ticket);
    }
    if kind.writes_results() {
        app.requests.claim_results(ticket);
    }

    log::info!("Dispatching {name} as request {ticket}");
    Some(ApiRequest { ticket, kind })
}

fn require_identity(app: &mut App) -> Option<CustomerId> {
    let id = app.form.identity();
    if id.is_none() {
        app.messages.error(ID_REQUIRED);
    }
    id
}
