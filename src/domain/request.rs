use chrono::{DateTime, Utc};

use crate::domain::value::{Filter, SegmentId};

/// Payload for `POST /segments`.
///
/// Fields are not checked locally; the server rejects a missing name,
/// description, or an empty filter with a 400.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewSegment {
    pub name: String,
    pub description: String,
    pub filter: Filter,
}

impl NewSegment {
    /// Build a create payload. Blank values are sent unchanged.
    pub fn new(name: impl Into<String>, description: impl Into<String>, filter: Filter) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            filter,
        }
    }
}

/// Partial update for `PUT /segments/{id}`. Unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub filter: Option<Filter>,
}

impl SegmentUpdate {
    /// Set a new segment name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set a new description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replace the whole filter.
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// `true` when no field is set. Such an update is still sent; the server rejects it.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.filter.is_none()
    }
}

/// Payload for `POST /campaigns`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCampaign {
    pub segment_id: SegmentId,
    /// Message template; may contain `{{ field }}` substitutions.
    pub message: String,
}

impl NewCampaign {
    /// Build a create payload targeting `segment_id`.
    pub fn new(segment_id: SegmentId, message: impl Into<String>) -> Self {
        Self {
            segment_id,
            message: message.into(),
        }
    }
}

/// Partial update for `PUT /campaigns/{id}`.
///
/// Changing `segment_id` is validated server-side against existing segments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CampaignUpdate {
    pub segment_id: Option<SegmentId>,
    pub message: Option<String>,
}

impl CampaignUpdate {
    /// Point the campaign at another segment.
    pub fn segment_id(mut self, segment_id: SegmentId) -> Self {
        self.segment_id = Some(segment_id);
        self
    }

    /// Replace the message template.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// `true` when no field is set.
    pub fn is_empty(&self) -> bool {
        self.segment_id.is_none() && self.message.is_none()
    }
}

/// `limit`/`offset` query parameters for list endpoints. Unset values are omitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl Pagination {
    /// Set both `limit` and `offset`.
    pub fn new(limit: u32, offset: u32) -> Self {
        Self {
            limit: Some(limit),
            offset: Some(offset),
        }
    }

    /// Maximum number of items to return.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Number of items to skip.
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }
}

/// Options for `POST /campaigns/{id}/send`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SendOptions {
    /// Dispatch at this time instead of as soon as possible.
    pub scheduled_at: Option<DateTime<Utc>>,
}

impl SendOptions {
    /// Schedule the dispatch for `at`.
    pub fn scheduled_at(at: DateTime<Utc>) -> Self {
        Self {
            scheduled_at: Some(at),
        }
    }
}
