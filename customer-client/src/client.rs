//! reqwest-backed [`CustomerApi`] implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderValue};
use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;

use crate::error::{ClientError, Result};
use crate::http_client::HttpUtils;
use crate::query::SearchFilter;
use crate::traits::CustomerApi;
use crate::types::{Customer, CustomerId, CustomerUpdate, LifecycleAction, NewCustomer};
use crate::utils::log_sanitizer::sanitize_for_log;

/// Default collection endpoint of the service.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8080/api/customers";
/// Default connect timeout in seconds.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

const JSON: HeaderValue = HeaderValue::from_static("application/json");

/// Connection settings for [`HttpCustomerClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Collection URL, e.g. `http://host/api/customers`.
    pub endpoint: String,
    pub connect_timeout: Duration,
    /// Whole-request timeout. `None` waits indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            request_timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }
}

/// HTTP client for the customer service.
pub struct HttpCustomerClient {
    client: Client,
    endpoint: String,
}

impl HttpCustomerClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = Client::builder().connect_timeout(config.connect_timeout);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| ClientError::Config {
            detail: e.to_string(),
        })?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn record_url(&self, id: &CustomerId) -> String {
        format!("{}/{id}", self.endpoint)
    }

    /// Every request declares JSON, with or without a body.
    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.client
            .request(method, url)
            .header(CONTENT_TYPE, JSON)
            .header(ACCEPT, JSON)
    }

    fn with_body<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<RequestBuilder> {
        let body_json = serde_json::to_string(body).map_err(|e| ClientError::Serialization {
            detail: e.to_string(),
        })?;
        log::debug!("Request Body: {}", sanitize_for_log(&body_json));
        Ok(builder.body(body_json))
    }

    /// Send, check the status and return the raw body.
    async fn send(&self, builder: RequestBuilder, method: &Method, url: &str) -> Result<String> {
        let (status, text) = HttpUtils::execute_request(builder, method.as_str(), url).await?;
        HttpUtils::ensure_success(status, text)
    }

    async fn fetch_list(&self, url: &str) -> Result<Vec<Customer>> {
        let text = self
            .send(self.request(Method::GET, url), &Method::GET, url)
            .await?;
        let customers: Vec<Customer> = HttpUtils::parse_json(&text)?;
        log::info!("Received {} customer(s)", customers.len());
        Ok(customers)
    }
}

#[async_trait]
impl CustomerApi for HttpCustomerClient {
    async fn create(&self, customer: &NewCustomer) -> Result<Customer> {
        let url = self.endpoint.clone();
        let builder = Self::with_body(self.request(Method::POST, &url), customer)?;
        let text = self.send(builder, &Method::POST, &url).await?;
        let created: Customer = HttpUtils::parse_json(&text)?;
        log::info!("Customer {} created", created.id);
        Ok(created)
    }

    async fn list(&self) -> Result<Vec<Customer>> {
        self.fetch_list(&self.endpoint).await
    }

    async fn search(&self, filter: &SearchFilter) -> Result<Vec<Customer>> {
        let url = filter.apply_to(&self.endpoint);
        self.fetch_list(&url).await
    }

    async fn get(&self, id: &CustomerId) -> Result<Customer> {
        let url = self.record_url(id);
        let text = self
            .send(self.request(Method::GET, &url), &Method::GET, &url)
            .await?;
        HttpUtils::parse_json(&text)
    }

    async fn update(&self, id: &CustomerId, customer: &CustomerUpdate) -> Result<Customer> {
        let url = self.record_url(id);
        let builder = Self::with_body(self.request(Method::PUT, &url), customer)?;
        let text = self.send(builder, &Method::PUT, &url).await?;
        let updated: Customer = HttpUtils::parse_json(&text)?;
        log::info!("Customer {id} updated");
        Ok(updated)
    }

    async fn delete(&self, id: &CustomerId) -> Result<()> {
        let url = self.record_url(id);
        self.send(self.request(Method::DELETE, &url), &Method::DELETE, &url)
            .await?;
        log::info!("Customer {id} deleted");
        Ok(())
    }

    async fn transition(&self, id: &CustomerId, action: LifecycleAction) -> Result<()> {
        let url = format!("{}/{}", self.record_url(id), action.path_segment());
        self.send(self.request(Method::PUT, &url), &Method::PUT, &url)
            .await?;
        log::info!("Customer {id} {}d", action.verb());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let client =
            HttpCustomerClient::new(&ClientConfig::with_endpoint("http://localhost/customers/"))
                .unwrap();
        assert_eq!(client.endpoint(), "http://localhost/customers");
    }

    #[test]
    fn record_url_appends_identity() {
        let client =
            HttpCustomerClient::new(&ClientConfig::with_endpoint("http://localhost/customers"))
                .unwrap();
        let id = CustomerId::parse("12").unwrap();
        assert_eq!(client.record_url(&id), "http://localhost/customers/12");
    }

    #[test]
    fn default_config_has_no_request_timeout() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(config.request_timeout.is_none());
    }
}
