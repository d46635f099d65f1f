use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value, json};

use super::{TransportError, invalid};
use crate::domain::{Filter, NewSegment, Segment, SegmentId, SegmentUpdate};

#[derive(Debug, Clone, Deserialize)]
pub(super) struct SegmentJson {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    filter: Map<String, Value>,
    #[serde(default)]
    recipients: u64,
    #[serde(default, alias = "createdAt")]
    created_at: Option<DateTime<Utc>>,
    #[serde(default, alias = "updatedAt")]
    updated_at: Option<DateTime<Utc>>,
}

impl SegmentJson {
    pub(super) fn into_domain(self) -> Result<Segment, TransportError> {
        Ok(Segment {
            id: SegmentId::new(self.id).map_err(invalid(SegmentId::FIELD))?,
            name: self.name,
            description: self.description,
            filter: self.filter.into(),
            recipients: self.recipients,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

// Get/update wrap the segment; create may answer with the bare object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SegmentBody {
    Wrapped { segment: SegmentJson },
    Flat(SegmentJson),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SegmentListBody {
    Wrapped {
        #[serde(default)]
        segments: Vec<SegmentJson>,
    },
    Bare(Vec<SegmentJson>),
}

/// Body for `POST /segments`: `{"segment": {...}}`. Blank fields are sent as-is.
pub fn encode_new_segment(request: &NewSegment) -> Value {
    json!({
        "segment": {
            "name": request.name,
            "description": request.description,
            "filter": request.filter.as_map(),
        }
    })
}

/// Body for `PUT /segments/{id}`: only the set fields, not wrapped in an envelope.
pub fn encode_segment_update(update: &SegmentUpdate) -> Value {
    let mut body = Map::new();
    if let Some(name) = &update.name {
        body.insert("name".to_owned(), Value::from(name.as_str()));
    }
    if let Some(description) = &update.description {
        body.insert("description".to_owned(), Value::from(description.as_str()));
    }
    if let Some(filter) = &update.filter {
        body.insert(
            Filter::FIELD.to_owned(),
            Value::Object(filter.as_map().clone()),
        );
    }
    Value::Object(body)
}

pub fn decode_segment_response(json: &str) -> Result<Segment, TransportError> {
    match serde_json::from_str::<SegmentBody>(json)? {
        SegmentBody::Wrapped { segment } | SegmentBody::Flat(segment) => segment.into_domain(),
    }
}

pub fn decode_segment_list_response(json: &str) -> Result<Vec<Segment>, TransportError> {
    let segments = match serde_json::from_str::<SegmentListBody>(json)? {
        SegmentListBody::Wrapped { segments } | SegmentListBody::Bare(segments) => segments,
    };
    segments
        .into_iter()
        .map(SegmentJson::into_domain)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_new_segment_wraps_fields() {
        let request = NewSegment::new(
            "Messaging users",
            "Everyone in messaging channels",
            Filter::new().with("channel", json!({ "type": "messaging" })),
        );
        assert_eq!(
            encode_new_segment(&request),
            json!({
                "segment": {
                    "name": "Messaging users",
                    "description": "Everyone in messaging channels",
                    "filter": { "channel": { "type": "messaging" } }
                }
            })
        );
    }

    #[test]
    fn encode_new_segment_keeps_blank_fields_for_the_server_to_reject() {
        let request = NewSegment::new("", "", Filter::new());
        assert_eq!(
            encode_new_segment(&request),
            json!({ "segment": { "name": "", "description": "", "filter": {} } })
        );
    }

    #[test]
    fn encode_segment_update_sends_only_set_fields() {
        let update = SegmentUpdate::default().description("renamed audience");
        assert_eq!(
            encode_segment_update(&update),
            json!({ "description": "renamed audience" })
        );
        assert_eq!(encode_segment_update(&SegmentUpdate::default()), json!({}));
    }

    #[test]
    fn decode_segment_response_maps_payload() {
        let json = r#"
        {
          "segment": {
            "id": "5f1c0a2e",
            "name": "Messaging users",
            "description": "Everyone in messaging channels",
            "filter": { "channel": { "type": "messaging" } },
            "recipients": 1234,
            "created_at": "2021-03-04T10:11:12.123456Z",
            "updated_at": "2021-03-04T10:11:12Z"
          },
          "duration": "1.23ms"
        }
        "#;

        let segment = decode_segment_response(json).unwrap();
        assert_eq!(segment.id.as_str(), "5f1c0a2e");
        assert_eq!(segment.recipients, 1234);
        assert_eq!(
            segment.filter.as_map()["channel"],
            json!({ "type": "messaging" })
        );
        assert_eq!(
            segment.updated_at.map(|at| at.to_rfc3339()).as_deref(),
            Some("2021-03-04T10:11:12+00:00")
        );
        assert!(segment.created_at.is_some());
    }

    #[test]
    fn decode_segment_response_rejects_blank_id() {
        let err = decode_segment_response(r#"{"segment": {"id": " "}}"#).unwrap_err();
        assert!(matches!(
            err,
            TransportError::InvalidField {
                field: "segment_id",
                ..
            }
        ));
    }

    #[test]
    fn decode_segment_list_response_preserves_order_and_accepts_empty() {
        let json = r#"
        {
          "segments": [
            { "id": "a", "name": "first", "recipients": 1 },
            { "id": "b", "name": "second", "recipients": 2 }
          ]
        }
        "#;
        let segments = decode_segment_list_response(json).unwrap();
        let ids: Vec<_> = segments.iter().map(|it| it.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);

        assert!(decode_segment_list_response(r#"{"segments": []}"#)
            .unwrap()
            .is_empty());
        assert!(decode_segment_list_response("{}").unwrap().is_empty());
    }

    #[test]
    fn decode_segment_response_accepts_flat_create_payload() {
        let json = r#"
        {
          "id": "seg-1",
          "name": "Messaging users",
          "description": "Everyone in messaging channels",
          "filter": { "channel": { "type": "messaging" } },
          "recipients": 3
        }
        "#;
        let segment = decode_segment_response(json).unwrap();
        assert_eq!(segment.id.as_str(), "seg-1");
        assert_eq!(segment.name, "Messaging users");
        assert_eq!(segment.recipients, 3);
    }

    #[test]
    fn decode_segment_list_response_accepts_bare_array() {
        let json = r#"[{ "id": "a", "recipients": 1 }, { "id": "b" }]"#;
        let ids: Vec<_> = decode_segment_list_response(json)
            .unwrap()
            .into_iter()
            .map(|it| it.id.as_str().to_owned())
            .collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert!(decode_segment_list_response("[]").unwrap().is_empty());
    }
}
