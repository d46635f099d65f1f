use serde_json::{Map, Value};

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Stream application API key, sent as the `api_key` query parameter.
///
/// Invariant: non-empty after trimming.
pub struct ApiKey(String);

impl ApiKey {
    /// Query parameter name used by Stream (`api_key`).
    pub const FIELD: &'static str = "api_key";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Server-side JWT sent in the `Authorization` header.
///
/// The token is signed by the caller; this crate does not mint tokens.
/// Invariant: non-empty after trimming. `Debug` output is redacted.
pub struct AuthToken(String);

impl AuthToken {
    /// Field name reported in validation errors.
    pub const FIELD: &'static str = "token";

    /// Create a validated [`AuthToken`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the raw token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AuthToken(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Server-assigned segment id.
///
/// Invariant: non-empty after trimming, so it always addresses `/segments/{id}`
/// rather than the collection.
pub struct SegmentId(String);

impl SegmentId {
    /// JSON field name used by Stream (`segment_id`).
    pub const FIELD: &'static str = "segment_id";

    /// Create a validated [`SegmentId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Server-assigned campaign id.
///
/// Invariant: non-empty after trimming.
pub struct CampaignId(String);

impl CampaignId {
    /// JSON field name used by Stream (`campaign_id`).
    pub const FIELD: &'static str = "campaign_id";

    /// Create a validated [`CampaignId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Chat user id, used as an explicit recipient of a test send.
pub struct UserId(String);

impl UserId {
    /// Field name reported in validation errors.
    pub const FIELD: &'static str = "user_id";

    /// Create a validated [`UserId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
/// Segment membership predicate over channel/user attributes.
///
/// The filter is opaque to the client: an empty filter is representable and is
/// rejected by the server, not here.
///
/// ```rust
/// use serde_json::json;
/// use stream_campaigns::Filter;
///
/// let filter = Filter::new()
///     .with("channel", json!({ "type": "messaging" }))
///     .with("user", json!({ "role": "user" }));
/// assert_eq!(filter.len(), 2);
/// ```
pub struct Filter(Map<String, Value>);

impl Filter {
    /// JSON field name used by Stream (`filter`).
    pub const FIELD: &'static str = "filter";

    /// Create an empty filter.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Add (or replace) a top-level predicate.
    pub fn with(mut self, key: impl Into<String>, predicate: Value) -> Self {
        self.0.insert(key.into(), predicate);
        self
    }

    /// `true` when no predicate is set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of top-level predicates.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Borrow the predicate map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for Filter {
    fn from(value: Map<String, Value>) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
/// Sample data used to render a campaign message template in a preview.
///
/// Keys are template field names; values are substituted as-is by the server.
pub struct TemplateParams(Map<String, Value>);

impl TemplateParams {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Set a sample value for one template field.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    /// `true` when no sample value is set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the parameter map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for TemplateParams {
    fn from(value: Map<String, Value>) -> Self {
        Self(value)
    }
}
