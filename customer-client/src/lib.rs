//! # customer-client
//!
//! Typed async client for the customer record-management REST service.
//!
//! ## Endpoints
//!
//! | Operation | Request |
//! |-----------|---------|
//! | create | `POST {endpoint}` |
//! | list | `GET {endpoint}` |
//! | search | `GET {endpoint}?<filter>` |
//! | retrieve | `GET {endpoint}/{id}` |
//! | update | `PUT {endpoint}/{id}` |
//! | delete | `DELETE {endpoint}/{id}` |
//! | activate / deactivate | `PUT {endpoint}/{id}/activate`, `PUT {endpoint}/{id}/deactivate` |
//!
//! Every request declares `application/json`. Failures carrying a
//! `{ "message": ... }` body surface as [`ClientError::Service`].
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use customer_client::{ClientConfig, CustomerApi, FilterKey, HttpCustomerClient, SearchFilter};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HttpCustomerClient::new(&ClientConfig::with_endpoint(
//!         "http://localhost:8080/api/customers",
//!     ))?;
//!
//!     let filter = SearchFilter::new().with(FilterKey::Email, "a@b.com");
//!     for customer in client.search(&filter).await? {
//!         println!("{} {}", customer.id, customer.username);
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod http_client;
mod query;
mod traits;
mod types;
mod utils;

pub use client::{ClientConfig, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_ENDPOINT, HttpCustomerClient};
pub use error::{ClientError, Result};
pub use query::{FilterKey, SearchFilter};
pub use traits::CustomerApi;
pub use types::{
    Customer, CustomerId, CustomerUpdate, ErrorBody, IllegalTransition, LifecycleAction,
    LifecycleState, NewCustomer,
};
