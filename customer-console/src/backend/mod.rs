//!
//! src/backend/mod.rs
//! Backend 层：异步请求执行
//!
//! Update 层只产出 `ApiRequest`，不直接访问网络。
//! `CustomerService` 把请求交给 tokio 运行时执行，
//! 完成后把 `Completion` 包装成 `AppMessage::Completed` 送回主循环。
//!
//!     update()  ──ApiRequest──▶  CustomerService::dispatch()
//!                                     │ runtime.spawn
//!                                     ▼
//!                                 execute(api, request)
//!                                     │ mpsc
//!     update()  ◀──AppMessage::Completed(Completion)──┘
//!

mod customer_service;
mod request;

#[cfg(test)]
pub(crate) mod mock_api;

pub use customer_service::{CustomerService, execute};
pub use request::{ApiRequest, Completion, Outcome, RequestKind};
