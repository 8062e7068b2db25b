use async_trait::async_trait;

use crate::error::Result;
use crate::query::SearchFilter;
use crate::types::{Customer, CustomerId, CustomerUpdate, LifecycleAction, NewCustomer};

/// Operations offered by the customer record-management service.
///
/// [`HttpCustomerClient`](crate::HttpCustomerClient) is the production
/// implementation; front ends depend on this trait so they can be driven by
/// an in-memory double in tests.
#[async_trait]
pub trait CustomerApi: Send + Sync {
    /// `POST {endpoint}` — returns the stored record with its assigned id.
    async fn create(&self, customer: &NewCustomer) -> Result<Customer>;

    /// `GET {endpoint}` — every record.
    async fn list(&self) -> Result<Vec<Customer>>;

    /// `GET {endpoint}?<filter>` — an empty filter behaves like [`list`](Self::list).
    async fn search(&self, filter: &SearchFilter) -> Result<Vec<Customer>>;

    /// `GET {endpoint}/{id}`
    async fn get(&self, id: &CustomerId) -> Result<Customer>;

    /// `PUT {endpoint}/{id}` — never changes the lifecycle state.
    async fn update(&self, id: &CustomerId, customer: &CustomerUpdate) -> Result<Customer>;

    /// `DELETE {endpoint}/{id}`
    async fn delete(&self, id: &CustomerId) -> Result<()>;

    /// `PUT {endpoint}/{id}/activate` or `PUT {endpoint}/{id}/deactivate`.
    async fn transition(&self, id: &CustomerId, action: LifecycleAction) -> Result<()>;

    /// Shorthand for [`transition`](Self::transition) with [`LifecycleAction::Activate`].
    async fn activate(&self, id: &CustomerId) -> Result<()> {
        self.transition(id, LifecycleAction::Activate).await
    }

    /// Shorthand for [`transition`](Self::transition) with [`LifecycleAction::Deactivate`].
    async fn deactivate(&self, id: &CustomerId) -> Result<()> {
        self.transition(id, LifecycleAction::Deactivate).await
    }
}
