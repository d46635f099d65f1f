//! Typed Rust client for the Stream Chat campaigns API.
//!
//! Segments select an audience with a filter; campaigns send a templated message
//! to a segment. The server owns validation and the campaign lifecycle, so every
//! method here is a single request and server rejections come back as
//! [`CampaignsError`] with the HTTP status preserved.
//!
//! The crate is split into a domain layer of strong types, a transport layer for
//! the JSON wire format, and a small client layer orchestrating requests.
//!
//! ```rust,no_run
//! use serde_json::json;
//! use stream_campaigns::{Auth, CampaignsClient, Filter, NewCampaign, NewSegment, SendOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), stream_campaigns::CampaignsError> {
//!     let client = CampaignsClient::new(Auth::new("api-key", "server-jwt")?);
//!     let segment = client
//!         .create_segment(NewSegment::new(
//!             "Messaging users",
//!             "Everyone in messaging channels",
//!             Filter::new().with("channel", json!({ "type": "messaging" })),
//!         ))
//!         .await?;
//!     let campaign = client
//!         .create_campaign(NewCampaign::new(segment.id, "Hi {{ user.name }}!"))
//!         .await?;
//!     let status = client
//!         .send_campaign(&campaign.id, SendOptions::default())
//!         .await?;
//!     println!("campaign is {}", status.status);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{Auth, CampaignsClient, CampaignsClientBuilder, CampaignsError};
pub use domain::{
    ApiKey, AuthToken, Campaign, CampaignId, CampaignPreview, CampaignState, CampaignStatus,
    CampaignUpdate, Filter, NewCampaign, NewSegment, Pagination, Progress, Segment, SegmentId,
    SegmentUpdate, SendOptions, TemplateParams, UserId, ValidationError,
};
