use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

// ============ Identity ============

/// Opaque customer identifier assigned by the service.
///
/// The service currently emits numeric ids, but nothing on the client side
/// depends on that: the id is carried as text and only ever echoed back in
/// request paths. Deserializes from either a JSON number or a JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CustomerId(String);

impl CustomerId {
    /// Wrap a non-empty identifier typed by the user.
    ///
    /// Returns `None` for blank input; the client never invents an id.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CustomerId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(u64),
            Text(String),
        }

        match RawId::deserialize(deserializer)? {
            RawId::Number(n) => Ok(Self(n.to_string())),
            RawId::Text(s) => Ok(Self(s)),
        }
    }
}

// ============ Records ============

/// A customer record as returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub active: bool,
}

impl Customer {
    /// Current lifecycle state derived from the `active` flag.
    pub fn lifecycle(&self) -> LifecycleState {
        LifecycleState::from_active(self.active)
    }
}

/// Request body for `POST {endpoint}`.
///
/// Carries no identity; the service assigns one. The initial `active` value is
/// part of creation, not a lifecycle transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCustomer {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub address: String,
    pub email: String,
    pub active: bool,
}

/// Request body for `PUT {endpoint}/{id}`.
///
/// Deliberately has no `active` field: lifecycle changes go through
/// [`CustomerApi::activate`](crate::CustomerApi::activate) and
/// [`CustomerApi::deactivate`](crate::CustomerApi::deactivate) only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerUpdate {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub address: String,
    pub email: String,
}

impl From<NewCustomer> for CustomerUpdate {
    fn from(c: NewCustomer) -> Self {
        Self {
            username: c.username,
            password: c.password,
            first_name: c.first_name,
            last_name: c.last_name,
            gender: c.gender,
            address: c.address,
            email: c.email,
        }
    }
}

/// Structured error object returned by the service on failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

// ============ Lifecycle ============

/// Two-state activation lifecycle of a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleState {
    Active,
    Inactive,
}

/// Transition requested through the dedicated lifecycle endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleAction {
    Activate,
    Deactivate,
}

/// Returned by [`LifecycleState::transition`] when the action does not apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IllegalTransition {
    pub from: LifecycleState,
    pub action: LifecycleAction,
}

impl fmt::Display for IllegalTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot {} a customer that is already {}",
            self.action.verb(),
            self.from.as_str()
        )
    }
}

impl std::error::Error for IllegalTransition {}

impl LifecycleState {
    pub fn from_active(active: bool) -> Self {
        if active { Self::Active } else { Self::Inactive }
    }

    pub fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    /// `activate: Inactive → Active`, `deactivate: Active → Inactive`.
    pub fn transition(self, action: LifecycleAction) -> Result<Self, IllegalTransition> {
        match (self, action) {
            (Self::Inactive, LifecycleAction::Activate) => Ok(Self::Active),
            (Self::Active, LifecycleAction::Deactivate) => Ok(Self::Inactive),
            (from, action) => Err(IllegalTransition { from, action }),
        }
    }
}

impl LifecycleAction {
    /// Path segment of the dedicated endpoint.
    pub fn path_segment(self) -> &'static str {
        match self {
            Self::Activate => "activate",
            Self::Deactivate => "deactivate",
        }
    }

    pub fn verb(self) -> &'static str {
        self.path_segment()
    }

    /// Capitalised name used as a prefix in user-facing failure messages.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Activate => "Activate",
            Self::Deactivate => "Deactivate",
        }
    }

    /// State the record is in once the action succeeded.
    pub fn target(self) -> LifecycleState {
        match self {
            Self::Activate => LifecycleState::Active,
            Self::Deactivate => LifecycleState::Inactive,
        }
    }
}
