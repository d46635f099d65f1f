use chrono::{DateTime, Utc};

use crate::domain::status::CampaignState;
use crate::domain::value::{CampaignId, Filter, SegmentId};

#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub id: SegmentId,
    pub name: String,
    pub description: String,
    pub filter: Filter,
    /// Server-computed number of users matching the filter.
    pub recipients: u64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    pub sent: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Campaign {
    pub id: CampaignId,
    pub message: String,
    pub segment_id: SegmentId,
    /// Embedded segment info, when the server includes it.
    pub segment: Option<Segment>,
    pub status: CampaignState,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub failed_at: Option<DateTime<Utc>>,
    pub progress: Option<Progress>,
    pub errors: Vec<String>,
}

/// Status payload returned by send, cancel, test-send and status polling.
#[derive(Debug, Clone, PartialEq)]
pub struct CampaignStatus {
    pub id: Option<CampaignId>,
    pub status: CampaignState,
    pub segment_id: Option<SegmentId>,
    pub segment: Option<Segment>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub failed_at: Option<DateTime<Utc>>,
    /// Messages sent so far; on `failed` this is the count reached before the failure.
    pub progress: Option<Progress>,
    pub errors: Vec<String>,
}

/// Rendered campaign message for the supplied sample data. Nothing is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignPreview {
    pub id: CampaignId,
    pub message: String,
}
