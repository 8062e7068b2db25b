//! Shared helpers for the HTTP integration tests

#![allow(dead_code)]

use customer_client::{ClientConfig, HttpCustomerClient, NewCustomer};
use serde_json::{Value, json};
use wiremock::MockServer;

pub const COLLECTION: &str = "/api/customers";

/// Assert `Result` is `Ok` and unwrap it (fails the test otherwise).
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Client pointed at the mock server's collection endpoint.
pub fn client_for(server: &MockServer) -> HttpCustomerClient {
    let config = ClientConfig::with_endpoint(format!("{}{COLLECTION}", server.uri()));
    match HttpCustomerClient::new(&config) {
        Ok(client) => client,
        Err(e) => panic!("client construction failed: {e}"),
    }
}

pub fn customer_json(id: u64, username: &str, active: bool) -> Value {
    json!({
        "id": id,
        "username": username,
        "password": "secret",
        "first_name": "First",
        "last_name": "Last",
        "gender": "UNKNOWN",
        "active": active,
        "address": "1 Main St",
        "email": format!("{username}@example.com"),
    })
}

pub fn new_alice() -> NewCustomer {
    NewCustomer {
        username: "alice".to_string(),
        password: "secret".to_string(),
        first_name: "Alice".to_string(),
        last_name: "Liddell".to_string(),
        gender: "FEMALE".to_string(),
        address: "1 Rabbit Hole".to_string(),
        email: "alice@example.com".to_string(),
        active: false,
    }
}
