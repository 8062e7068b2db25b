//! 测试辅助：内存中的客户服务

use std::collections::BTreeMap;

use async_trait::async_trait;
use customer_client::{
    ClientError, Customer, CustomerApi, CustomerId, CustomerUpdate, FilterKey, LifecycleAction,
    NewCustomer, Result, SearchFilter,
};
use tokio::sync::RwLock;

pub struct MockCustomerApi {
    customers: RwLock<BTreeMap<u64, Customer>>,
    next_id: RwLock<u64>,
    /// 如果 Some，下一次调用返回此错误
    fail_next: RwLock<Option<ClientError>>,
}

impl MockCustomerApi {
    pub fn new() -> Self {
        Self {
            customers: RwLock::new(BTreeMap::new()),
            next_id: RwLock::new(1),
            fail_next: RwLock::new(None),
        }
    }

    /// 直接写入一条记录，返回分配的 ID
    pub async fn seed(&self, customer: NewCustomer) -> CustomerId {
        self.insert(customer).await.id
    }

    pub async fn stored(&self, id: &CustomerId) -> Option<Customer> {
        let key = id.as_str().parse::<u64>().ok()?;
        self.customers.read().await.get(&key).cloned()
    }

    pub async fn fail_next(&self, err: ClientError) {
        *self.fail_next.write().await = Some(err);
    }

    async fn take_failure(&self) -> Result<()> {
        match self.fail_next.write().await.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn insert(&self, c: NewCustomer) -> Customer {
        let mut next = self.next_id.write().await;
        let key = *next;
        *next += 1;
        let customer = Customer {
            id: CustomerId::parse(&key.to_string()).unwrap(),
            username: c.username,
            password: c.password,
            first_name: c.first_name,
            last_name: c.last_name,
            gender: c.gender,
            address: c.address,
            email: c.email,
            active: c.active,
        };
        self.customers.write().await.insert(key, customer.clone());
        customer
    }

    fn not_found(id: &CustomerId) -> ClientError {
        ClientError::Service {
            status: 404,
            message: format!("Customer with id '{id}' was not found."),
        }
    }

    fn key(id: &CustomerId) -> Result<u64> {
        id.as_str().parse().map_err(|_| Self::not_found(id))
    }

    fn matches(customer: &Customer, filter: &SearchFilter) -> bool {
        let field = |key: FilterKey| match key {
            FilterKey::Username => customer.username.clone(),
            FilterKey::Email => customer.email.clone(),
            FilterKey::Address => customer.address.clone(),
            FilterKey::FirstName => customer.first_name.clone(),
            FilterKey::LastName => customer.last_name.clone(),
            FilterKey::Gender => customer.gender.clone(),
            FilterKey::Active => customer.active.to_string(),
        };
        FilterKey::ALL
            .iter()
            .all(|key| filter.get(*key).is_none_or(|wanted| wanted == field(*key)))
    }
}

#[async_trait]
impl CustomerApi for MockCustomerApi {
    async fn create(&self, customer: &NewCustomer) -> Result<Customer> {
        self.take_failure().await?;
        Ok(self.insert(customer.clone()).await)
    }

    async fn list(&self) -> Result<Vec<Customer>> {
        self.take_failure().await?;
        Ok(self.customers.read().await.values().cloned().collect())
    }

    async fn search(&self, filter: &SearchFilter) -> Result<Vec<Customer>> {
        self.take_failure().await?;
        Ok(self
            .customers
            .read()
            .await
            .values()
            .filter(|c| Self::matches(c, filter))
            .cloned()
            .collect())
    }

    async fn get(&self, id: &CustomerId) -> Result<Customer> {
        self.take_failure().await?;
        self.stored(id).await.ok_or_else(|| Self::not_found(id))
    }

    async fn update(&self, id: &CustomerId, update: &CustomerUpdate) -> Result<Customer> {
        self.take_failure().await?;
        let key = Self::key(id)?;
        let mut store = self.customers.write().await;
        let customer = store.get_mut(&key).ok_or_else(|| Self::not_found(id))?;
        customer.username.clone_from(&update.username);
        customer.password.clone_from(&update.password);
        customer.first_name.clone_from(&update.first_name);
        customer.last_name.clone_from(&update.last_name);
        customer.gender.clone_from(&update.gender);
        customer.address.clone_from(&update.address);
        customer.email.clone_from(&update.email);
        Ok(customer.clone())
    }

    async fn delete(&self, id: &CustomerId) -> Result<()> {
        self.take_failure().await?;
        if let Ok(key) = Self::key(id) {
            self.customers.write().await.remove(&key);
        }
        Ok(())
    }

    async fn transition(&self, id: &CustomerId, action: LifecycleAction) -> Result<()> {
        self.take_failure().await?;
        let key = Self::key(id)?;
        let mut store = self.customers.write().await;
        let customer = store.get_mut(&key).ok_or_else(|| Self::not_found(id))?;
        customer.active = action.target().is_active();
        Ok(())
    }
}
