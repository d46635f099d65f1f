use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value, json};

use super::error_entry::TransportErrorEntry;
use super::segment::SegmentJson;
use super::{TransportError, invalid};
use crate::domain::{
    Campaign, CampaignId, CampaignState, CampaignUpdate, NewCampaign, Progress, SegmentId,
};

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub(super) struct ProgressJson {
    #[serde(default)]
    sent: u64,
}

impl From<ProgressJson> for Progress {
    fn from(value: ProgressJson) -> Self {
        Progress { sent: value.sent }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct CampaignJson {
    id: String,
    #[serde(default, alias = "text")]
    message: String,
    #[serde(default)]
    segment_id: Option<String>,
    #[serde(default)]
    segment: Option<SegmentJson>,
    #[serde(default)]
    status: String,
    #[serde(default, alias = "scheduledAt")]
    scheduled_at: Option<DateTime<Utc>>,
    #[serde(default, alias = "createdAt")]
    created_at: Option<DateTime<Utc>>,
    #[serde(default, alias = "updatedAt")]
    updated_at: Option<DateTime<Utc>>,
    #[serde(default, alias = "completedAt")]
    completed_at: Option<DateTime<Utc>>,
    #[serde(default, alias = "failedAt")]
    failed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    progress: Option<ProgressJson>,
    #[serde(default)]
    errors: Vec<TransportErrorEntry>,
}

impl CampaignJson {
    fn into_domain(self) -> Result<Campaign, TransportError> {
        let segment = self.segment.map(SegmentJson::into_domain).transpose()?;
        // Payloads may only embed the segment; fall back to its id.
        let segment_id = match (self.segment_id, &segment) {
            (Some(raw), _) => SegmentId::new(raw).map_err(invalid(SegmentId::FIELD))?,
            (None, Some(segment)) => segment.id.clone(),
            (None, None) => {
                return Err(TransportError::MissingField {
                    field: SegmentId::FIELD,
                });
            }
        };

        Ok(Campaign {
            id: CampaignId::new(self.id).map_err(invalid(CampaignId::FIELD))?,
            message: self.message,
            segment_id,
            segment,
            status: CampaignState::from_wire(&self.status),
            scheduled_at: self.scheduled_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
            completed_at: self.completed_at,
            failed_at: self.failed_at,
            progress: self.progress.map(Progress::from),
            errors: self
                .errors
                .into_iter()
                .map(TransportErrorEntry::into_string)
                .collect(),
        })
    }
}

// Get/update wrap the campaign; create may answer with the bare object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CampaignBody {
    Wrapped { campaign: CampaignJson },
    Flat(CampaignJson),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CampaignListBody {
    Wrapped {
        #[serde(default)]
        campaigns: Vec<CampaignJson>,
    },
    Bare(Vec<CampaignJson>),
}

/// Body for `POST /campaigns`: `{"campaign": {...}}`.
pub fn encode_new_campaign(request: &NewCampaign) -> Value {
    json!({
        "campaign": {
            "segment_id": request.segment_id.as_str(),
            "message": request.message,
        }
    })
}

/// Body for `PUT /campaigns/{id}`: only the set fields, not wrapped in an envelope.
pub fn encode_campaign_update(update: &CampaignUpdate) -> Value {
    let mut body = Map::new();
    if let Some(segment_id) = &update.segment_id {
        body.insert(
            SegmentId::FIELD.to_owned(),
            Value::from(segment_id.as_str()),
        );
    }
    if let Some(message) = &update.message {
        body.insert("message".to_owned(), Value::from(message.as_str()));
    }
    Value::Object(body)
}

pub fn decode_campaign_response(json: &str) -> Result<Campaign, TransportError> {
    match serde_json::from_str::<CampaignBody>(json)? {
        CampaignBody::Wrapped { campaign } | CampaignBody::Flat(campaign) => campaign.into_domain(),
    }
}

pub fn decode_campaign_list_response(json: &str) -> Result<Vec<Campaign>, TransportError> {
    let campaigns = match serde_json::from_str::<CampaignListBody>(json)? {
        CampaignListBody::Wrapped { campaigns } | CampaignListBody::Bare(campaigns) => campaigns,
    };
    campaigns
        .into_iter()
        .map(CampaignJson::into_domain)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_new_campaign_wraps_fields() {
        let request = NewCampaign::new(
            SegmentId::new("seg-1").unwrap(),
            "Hi {{ user.name }}, check this out!",
        );
        assert_eq!(
            encode_new_campaign(&request),
            json!({
                "campaign": {
                    "segment_id": "seg-1",
                    "message": "Hi {{ user.name }}, check this out!"
                }
            })
        );
    }

    #[test]
    fn encode_campaign_update_sends_only_set_fields() {
        let update = CampaignUpdate::default().segment_id(SegmentId::new("seg-2").unwrap());
        assert_eq!(
            encode_campaign_update(&update),
            json!({ "segment_id": "seg-2" })
        );
        assert_eq!(encode_campaign_update(&CampaignUpdate::default()), json!({}));
    }

    #[test]
    fn decode_campaign_response_maps_failed_payload() {
        let json = r#"
        {
          "campaign": {
            "id": "c-1",
            "message": "Hello {{ user.name }}",
            "segment_id": "seg-1",
            "segment": { "id": "seg-1", "name": "all", "recipients": 5000 },
            "status": "failed",
            "scheduled_at": "2021-05-01T09:00:00Z",
            "failedAt": "2021-05-01T09:03:00Z",
            "progress": { "sent": 1234 },
            "errors": ["push provider unavailable"]
          }
        }
        "#;

        let campaign = decode_campaign_response(json).unwrap();
        assert_eq!(campaign.id.as_str(), "c-1");
        assert_eq!(campaign.status, CampaignState::Failed);
        assert_eq!(campaign.segment_id.as_str(), "seg-1");
        assert_eq!(campaign.segment.as_ref().map(|it| it.recipients), Some(5000));
        assert!(campaign.failed_at.is_some());
        assert!(campaign.completed_at.is_none());
        assert_eq!(campaign.progress, Some(Progress { sent: 1234 }));
        assert_eq!(campaign.errors, vec!["push provider unavailable"]);
    }

    #[test]
    fn decode_campaign_response_takes_segment_id_from_embedded_segment() {
        let json = r#"
        {
          "campaign": {
            "id": "c-1",
            "status": "pending",
            "segment": { "id": "seg-9" }
          }
        }
        "#;
        let campaign = decode_campaign_response(json).unwrap();
        assert_eq!(campaign.segment_id.as_str(), "seg-9");
        assert_eq!(campaign.status, CampaignState::Pending);
    }

    #[test]
    fn decode_campaign_response_requires_a_segment_reference() {
        let err = decode_campaign_response(r#"{"campaign": {"id": "c-1", "status": "pending"}}"#)
            .unwrap_err();
        assert!(matches!(
            err,
            TransportError::MissingField {
                field: "segment_id"
            }
        ));
    }

    #[test]
    fn decode_campaign_response_keeps_unknown_status() {
        let json = r#"{"campaign": {"id": "c-1", "segment_id": "s", "status": "draft"}}"#;
        let campaign = decode_campaign_response(json).unwrap();
        assert_eq!(campaign.status, CampaignState::Unknown);
    }

    #[test]
    fn decode_campaign_list_response_accepts_empty() {
        assert!(decode_campaign_list_response(r#"{"campaigns": []}"#)
            .unwrap()
            .is_empty());

        let json = r#"
        {
          "campaigns": [
            { "id": "c-1", "segment_id": "s", "status": "completed" },
            { "id": "c-2", "segment_id": "s", "status": "in_progress" }
          ]
        }
        "#;
        let statuses: Vec<_> = decode_campaign_list_response(json)
            .unwrap()
            .into_iter()
            .map(|it| it.status)
            .collect();
        assert_eq!(
            statuses,
            vec![CampaignState::Completed, CampaignState::InProgress]
        );
    }

    #[test]
    fn decode_campaign_response_accepts_flat_create_payload() {
        let json = r#"{"id": "c-1", "segment_id": "seg-1", "message": "hi", "status": "pending"}"#;
        let campaign = decode_campaign_response(json).unwrap();
        assert_eq!(campaign.id.as_str(), "c-1");
        assert_eq!(campaign.segment_id.as_str(), "seg-1");
        assert_eq!(campaign.status, CampaignState::Pending);
    }

    #[test]
    fn decode_campaign_response_without_status_is_unknown() {
        let json = r#"{"campaign": {"id": "c-1", "segment_id": "s", "message": "hi"}}"#;
        let campaign = decode_campaign_response(json).unwrap();
        assert_eq!(campaign.status, CampaignState::Unknown);
        assert_eq!(campaign.message, "hi");
    }

    #[test]
    fn decode_campaign_list_response_accepts_bare_array() {
        let json = r#"
        [
          { "id": "c-1", "segment_id": "s", "status": "scheduled" },
          { "id": "c-2", "segment_id": "s" }
        ]
        "#;
        let statuses: Vec<_> = decode_campaign_list_response(json)
            .unwrap()
            .into_iter()
            .map(|it| it.status)
            .collect();
        assert_eq!(statuses, vec![CampaignState::Scheduled, CampaignState::Unknown]);
    }
}
