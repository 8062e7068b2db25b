//! 客户服务
//!
//! 在 tokio 运行时上执行请求，并把结果送回 UI 主循环

use std::sync::Arc;

use customer_client::{ClientError, CustomerApi};
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

use super::{ApiRequest, Completion, Outcome, RequestKind};
use crate::message::AppMessage;

/// TUI 客户服务
pub struct CustomerService {
    api: Arc<dyn CustomerApi>,
    runtime: Handle,
    completions: UnboundedSender<AppMessage>,
}

impl CustomerService {
    pub fn new(
        api: Arc<dyn CustomerApi>,
        runtime: Handle,
        completions: UnboundedSender<AppMessage>,
    ) -> Self {
        Self {
            api,
            runtime,
            completions,
        }
    }

    /// 后台执行请求，不阻塞 UI
    ///
    /// 执行任务 panic 时仍会送回一个失败结果，避免该客户的锁永远不释放。
    pub fn dispatch(&self, request: ApiRequest) {
        let api = Arc::clone(&self.api);
        let tx = self.completions.clone();
        let fallback = request.clone();
        let task = self
            .runtime
            .spawn(async move { execute(api.as_ref(), request).await });

        self.runtime.spawn(async move {
            let completion = match task.await {
                Ok(completion) => completion,
                Err(err) => {
                    log::error!("Request {} aborted: {err}", fallback.ticket);
                    Completion::failed(
                        fallback,
                        ClientError::Network {
                            detail: format!("request task aborted: {err}"),
                        },
                    )
                }
            };
            if tx.send(AppMessage::Completed(completion)).is_err() {
                log::debug!("UI loop has exited; dropping completion");
            }
        });
    }
}

/// 执行一个请求并产出完成结果
pub async fn execute(api: &dyn CustomerApi, request: ApiRequest) -> Completion {
    let ApiRequest { ticket, kind } = request;
    log::debug!("Executing request {ticket}");

    let outcome = match kind {
        RequestKind::Create(customer) => Outcome::Created(api.create(&customer).await),
        RequestKind::List => Outcome::Listed(api.list().await),
        RequestKind::Search(filter) => Outcome::Searched(api.search(&filter).await),
        RequestKind::Retrieve(id) => Outcome::Retrieved(api.get(&id).await),
        RequestKind::Update(id, customer) => {
            let result = api.update(&id, &customer).await;
            Outcome::Updated { id, result }
        }
        RequestKind::Delete(id) => {
            let result = api.delete(&id).await;
            Outcome::Deleted { id, result }
        }
        RequestKind::Details(id) => Outcome::Details(api.get(&id).await),
        RequestKind::Transition(id, action) => {
            let result = api.transition(&id, action).await;
            Outcome::Transitioned { id, action, result }
        }
    };

    Completion { ticket, outcome }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::mock_api::MockCustomerApi;
    use crate::message::Operation;
    use crate::model::{App, RequestTracker};
    use crate::update::update;
    use customer_client::{
        ClientError, Customer, CustomerId, CustomerUpdate, FilterKey, LifecycleAction,
        NewCustomer, SearchFilter,
    };
    use tokio::sync::mpsc;

    fn request(kind: RequestKind) -> ApiRequest {
        ApiRequest {
            ticket: RequestTracker::default().issue(),
            kind,
        }
    }

    fn draft(username: &str) -> NewCustomer {
        NewCustomer {
            username: username.to_string(),
            password: "pw".to_string(),
            first_name: String::new(),
            last_name: String::new(),
            gender: String::new(),
            address: String::new(),
            email: format!("{username}@example.com"),
            active: true,
        }
    }

    #[tokio::test]
    async fn create_returns_assigned_identity() {
        let api = MockCustomerApi::new();
        let completion = execute(&api, request(RequestKind::Create(draft("alice")))).await;

        let Outcome::Created(Ok(customer)) = completion.outcome else {
            panic!("unexpected outcome: {:?}", completion.outcome);
        };
        assert_eq!(customer.id.to_string(), "1");
        assert_eq!(customer.username, "alice");
    }

    #[tokio::test]
    async fn search_filters_by_populated_fields() {
        let api = MockCustomerApi::new();
        api.seed(draft("alice")).await;
        api.seed(draft("bob")).await;

        let filter = SearchFilter::new().with(FilterKey::Username, "bob");
        let completion = execute(&api, request(RequestKind::Search(filter))).await;

        let Outcome::Searched(Ok(found)) = completion.outcome else {
            panic!("unexpected outcome: {:?}", completion.outcome);
        };
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].username, "bob");
    }

    #[tokio::test]
    async fn missing_record_carries_service_message() {
        let api = MockCustomerApi::new();
        let id = CustomerId::parse("404").unwrap();
        let completion = execute(&api, request(RequestKind::Retrieve(id))).await;

        let Outcome::Retrieved(Err(err)) = completion.outcome else {
            panic!("unexpected outcome: {:?}", completion.outcome);
        };
        assert_eq!(err.status(), Some(404));
        assert!(err.service_message().is_some());
    }

    #[tokio::test]
    async fn transition_reports_identity_and_action() {
        let api = MockCustomerApi::new();
        let id = api.seed(draft("alice")).await;

        let completion = execute(
            &api,
            request(RequestKind::Transition(id.clone(), LifecycleAction::Deactivate)),
        )
        .await;

        let Outcome::Transitioned {
            id: done,
            action,
            result,
        } = completion.outcome
        else {
            panic!("unexpected outcome: {:?}", completion.outcome);
        };
        assert_eq!(done, id);
        assert_eq!(action, LifecycleAction::Deactivate);
        assert!(result.is_ok());
        assert!(!api.stored(&id).await.unwrap().active);
    }

    #[tokio::test]
    async fn transport_failure_is_propagated() {
        let api = MockCustomerApi::new();
        let id = api.seed(draft("alice")).await;
        api.fail_next(ClientError::Network {
            detail: "connection refused".to_string(),
        })
        .await;

        let completion = execute(&api, request(RequestKind::Delete(id.clone()))).await;
        let Outcome::Deleted { result, .. } = completion.outcome else {
            panic!("unexpected outcome: {:?}", completion.outcome);
        };
        assert!(matches!(result, Err(ClientError::Network { .. })));
        assert!(api.stored(&id).await.is_some());
    }

    /// 每个调用都 panic 的服务
    struct PanickingApi;

    #[async_trait::async_trait]
    impl CustomerApi for PanickingApi {
        async fn create(&self, _: &NewCustomer) -> customer_client::Result<Customer> {
            panic!("create exploded")
        }
        async fn list(&self) -> customer_client::Result<Vec<Customer>> {
            panic!("list exploded")
        }
        async fn search(&self, _: &SearchFilter) -> customer_client::Result<Vec<Customer>> {
            panic!("search exploded")
        }
        async fn get(&self, _: &CustomerId) -> customer_client::Result<Customer> {
            panic!("get exploded")
        }
        async fn update(
            &self,
            _: &CustomerId,
            _: &CustomerUpdate,
        ) -> customer_client::Result<Customer> {
            panic!("update exploded")
        }
        async fn delete(&self, _: &CustomerId) -> customer_client::Result<()> {
            panic!("delete exploded")
        }
        async fn transition(
            &self,
            _: &CustomerId,
            _: LifecycleAction,
        ) -> customer_client::Result<()> {
            panic!("transition exploded")
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn panicking_request_still_completes_and_releases_lock() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let service = CustomerService::new(Arc::new(PanickingApi), Handle::current(), tx);

        let mut app = App::new();
        app.form.id = "7".to_string();
        let sent = update(&mut app, AppMessage::Operation(Operation::Delete))
            .expect("delete should issue a request");
        let ticket = sent.ticket;
        service.dispatch(sent);

        let Some(AppMessage::Completed(completion)) = rx.recv().await else {
            panic!("expected a completion");
        };
        assert_eq!(completion.ticket, ticket);
        assert!(matches!(
            completion.outcome,
            Outcome::Deleted {
                result: Err(ClientError::Network { .. }),
                ..
            }
        ));

        update(&mut app, AppMessage::Completed(completion));
        assert!(!app.requests.is_locked(&CustomerId::parse("7").unwrap()));
        assert_eq!(app.messages.current().map(|m| m.text.as_str()), Some("Server error!"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn dispatch_delivers_completion_over_channel() {
        let api = Arc::new(MockCustomerApi::new());
        let (tx, mut rx) = mpsc::unbounded_channel();
        let service = CustomerService::new(api, Handle::current(), tx);

        let sent = request(RequestKind::List);
        let ticket = sent.ticket;
        service.dispatch(sent);

        let Some(AppMessage::Completed(completion)) = rx.recv().await else {
            panic!("expected a completion");
        };
        assert_eq!(completion.ticket, ticket);
        assert!(matches!(completion.outcome, Outcome::Listed(Ok(ref v)) if v.is_empty()));
    }
}
