//! Search filter and query-string assembly
//!
//! The service accepts a sparse set of `key=value` filters on the collection
//! endpoint. Keys are emitted in a fixed order and empty values are dropped
//! entirely (never sent as `key=`). Values are joined verbatim, without
//! percent-encoding.

/// Recognized filter keys, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FilterKey {
    Username,
    Email,
    Address,
    FirstName,
    LastName,
    Gender,
    Active,
}

impl FilterKey {
    /// Every key in the order it appears in a query string.
    pub const ALL: [Self; 7] = [
        Self::Username,
        Self::Email,
        Self::Address,
        Self::FirstName,
        Self::LastName,
        Self::Gender,
        Self::Active,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Email => "email",
            Self::Address => "address",
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Gender => "gender",
            Self::Active => "active",
        }
    }
}

/// Sparse field-to-value mapping used to build a search query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    pub username: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<String>,
    /// Sent as the wire boolean literal `true` / `false`.
    pub active: Option<bool>,
}

impl SearchFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a key from its text form. Blank values clear the key.
    ///
    /// For [`FilterKey::Active`] the value is matched against `true` / `false`
    /// ignoring ASCII case; anything else clears the key.
    #[must_use]
    pub fn with(mut self, key: FilterKey, value: impl Into<String>) -> Self {
        let value = value.into();
        let value = (!value.is_empty()).then_some(value);
        match key {
            FilterKey::Username => self.username = value,
            FilterKey::Email => self.email = value,
            FilterKey::Address => self.address = value,
            FilterKey::FirstName => self.first_name = value,
            FilterKey::LastName => self.last_name = value,
            FilterKey::Gender => self.gender = value,
            FilterKey::Active => self.active = value.as_deref().and_then(parse_active),
        }
        self
    }

    #[must_use]
    pub fn with_active(mut self, active: Option<bool>) -> Self {
        self.active = active;
        self
    }

    /// Value for `key`, or `None` when the key is absent or empty.
    pub fn get(&self, key: FilterKey) -> Option<String> {
        let text = match key {
            FilterKey::Username => self.username.as_deref(),
            FilterKey::Email => self.email.as_deref(),
            FilterKey::Address => self.address.as_deref(),
            FilterKey::FirstName => self.first_name.as_deref(),
            FilterKey::LastName => self.last_name.as_deref(),
            FilterKey::Gender => self.gender.as_deref(),
            FilterKey::Active => {
                return self
                    .active
                    .map(|a| if a { "true" } else { "false" }.to_string());
            }
        };
        text.filter(|v| !v.is_empty()).map(str::to_string)
    }

    pub fn is_empty(&self) -> bool {
        FilterKey::ALL.iter().all(|k| self.get(*k).is_none())
    }

    /// `key=value` pairs joined with `&`, in [`FilterKey::ALL`] order.
    pub fn query_string(&self) -> String {
        FilterKey::ALL
            .iter()
            .filter_map(|key| self.get(*key).map(|v| format!("{}={v}", key.as_str())))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Collection path with the query appended, or the bare path when unfiltered.
    pub fn apply_to(&self, path: &str) -> String {
        let query = self.query_string();
        if query.is_empty() {
            path.to_string()
        } else {
            format!("{path}?{query}")
        }
    }
}

fn parse_active(value: &str) -> Option<bool> {
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        log::warn!("Ignoring unrecognized active filter value '{value}'");
        None
    }
}
