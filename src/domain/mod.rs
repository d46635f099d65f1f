//! Domain layer: identifiers, request payloads and response records (no I/O).

mod request;
mod response;
mod status;
mod validation;
mod value;

pub use request::{CampaignUpdate, NewCampaign, NewSegment, Pagination, SegmentUpdate, SendOptions};
pub use response::{Campaign, CampaignPreview, CampaignStatus, Progress, Segment};
pub use status::CampaignState;
pub use validation::ValidationError;
pub use value::{ApiKey, AuthToken, CampaignId, Filter, SegmentId, TemplateParams, UserId};
