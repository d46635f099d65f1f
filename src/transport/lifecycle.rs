use chrono::{DateTime, SecondsFormat, Utc};
use serde::Deserialize;
use serde_json::{Map, Value, json};

use super::campaign::ProgressJson;
use super::error_entry::TransportErrorEntry;
use super::segment::SegmentJson;
use super::{TransportError, invalid};
use crate::domain::{
    ApiKey, CampaignId, CampaignPreview, CampaignState, CampaignStatus, Progress, SegmentId, SendOptions,
    TemplateParams, UserId,
};

#[derive(Debug, Clone, Deserialize)]
struct CampaignStatusJson {
    #[serde(default, alias = "campaign_id")]
    id: Option<String>,
    #[serde(default)]
    status: String,
    #[serde(default)]
    segment_id: Option<String>,
    #[serde(default)]
    segment: Option<SegmentJson>,
    #[serde(default, alias = "scheduledAt")]
    scheduled_at: Option<DateTime<Utc>>,
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

#[derive(Debug, Clone, Deserialize)]
struct CampaignPreviewJson {
    #[serde(default, alias = "campaign_id")]
    id: Option<String>,
    #[serde(alias = "text")]
    message: String,
}

/// Body for `POST /campaigns/{id}/send`. Without a schedule the body is `{}`.
pub fn encode_send_campaign_body(options: &SendOptions) -> Value {
    let mut body = Map::new();
    if let Some(at) = options.scheduled_at {
        body.insert(
            "scheduledAt".to_owned(),
            Value::from(at.to_rfc3339_opts(SecondsFormat::Millis, true)),
        );
    }
    Value::Object(body)
}

/// Body for `POST /campaigns/{id}/test`. An empty list is sent as-is.
pub fn encode_test_campaign_body(user_ids: &[UserId]) -> Value {
    json!({
        "userIds": user_ids.iter().map(UserId::as_str).collect::<Vec<_>>(),
    })
}

/// Query pairs for `GET /campaigns/{id}/preview`.
///
/// String values are sent verbatim; any other JSON value is sent as compact JSON.
/// A param named `api_key` is dropped since that query key carries the credentials.
pub fn encode_preview_query(params: &TemplateParams) -> Vec<(String, String)> {
    params
        .as_map()
        .iter()
        .filter(|(key, _)| key.as_str() != ApiKey::FIELD)
        .map(|(key, value)| {
            let value = match value {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            };
            (key.clone(), value)
        })
        .collect()
}

pub fn decode_campaign_status_response(json: &str) -> Result<CampaignStatus, TransportError> {
    let parsed: CampaignStatusJson = serde_json::from_str(json)?;

    Ok(CampaignStatus {
        id: parsed
            .id
            .map(CampaignId::new)
            .transpose()
            .map_err(invalid(CampaignId::FIELD))?,
        status: CampaignState::from_wire(&parsed.status),
        segment_id: parsed
            .segment_id
            .map(SegmentId::new)
            .transpose()
            .map_err(invalid(SegmentId::FIELD))?,
        segment: parsed.segment.map(SegmentJson::into_domain).transpose()?,
        scheduled_at: parsed.scheduled_at,
        updated_at: parsed.updated_at,
        completed_at: parsed.completed_at,
        failed_at: parsed.failed_at,
        progress: parsed.progress.map(Progress::from),
        errors: parsed
            .errors
            .into_iter()
            .map(TransportErrorEntry::into_string)
            .collect(),
    })
}

/// Decode a preview; the requested id is used when the server omits it.
pub fn decode_campaign_preview_response(
    requested: &CampaignId,
    json: &str,
) -> Result<CampaignPreview, TransportError> {
    let parsed: CampaignPreviewJson = serde_json::from_str(json)?;
    let id = match parsed.id {
        Some(raw) => CampaignId::new(raw).map_err(invalid(CampaignId::FIELD))?,
        None => requested.clone(),
    };
    Ok(CampaignPreview {
        id,
        message: parsed.message,
    })
}
