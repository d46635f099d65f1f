use std::error::Error as StdError;

use crate::domain::{CampaignState, ValidationError};

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`CampaignsClient`](crate::CampaignsClient).
///
/// Server-side failures are passed through untranslated; inspect
/// [`CampaignsError::status`] to tell validation (400) from not-found (404).
pub enum CampaignsError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-2xx response carrying the platform's error envelope.
    #[error("API error (HTTP {status}, code {code:?}): {message:?}")]
    Api {
        status: u16,
        code: Option<i64>,
        message: Option<String>,
        more_info: Option<String>,
    },

    /// Non-2xx response without a recognisable error envelope.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// A 2xx response body did not have the expected shape.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// The configured base URL could not be parsed.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The base URL cannot carry path segments (e.g. `mailto:`).
    #[error("base URL cannot be used for API paths: {url}")]
    InvalidBaseUrl { url: String },

    /// Local construction check failed (blank id or credential, missing env var).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CampaignsError {
    /// HTTP status of a server-side failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } | Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// `true` for a 404: the segment or campaign does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// `true` for a 400: the server rejected the request body, query or transition.
    pub fn is_validation_error(&self) -> bool {
        self.status() == Some(400)
    }

    /// Campaign status echoed by the server when it rejects a send or cancel.
    ///
    /// A state name following `status`, `state` or `is` wins; otherwise the last
    /// state name in the message is used.
    pub fn campaign_state(&self) -> Option<CampaignState> {
        let Self::Api {
            message: Some(message),
            ..
        } = self
        else {
            return None;
        };

        let words: Vec<&str> = message
            .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .filter(|word| !word.is_empty())
            .collect();

        let known = |word: &str| {
            let state = CampaignState::from_wire(&word.to_ascii_lowercase());
            (state != CampaignState::Unknown).then_some(state)
        };

        words
            .windows(2)
            .find_map(|pair| {
                let marker = pair[0].to_ascii_lowercase();
                matches!(marker.as_str(), "status" | "state" | "is")
                    .then(|| known(pair[1]))
                    .flatten()
            })
            .or_else(|| words.iter().rev().copied().find_map(known))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(status: u16, message: &str) -> CampaignsError {
        CampaignsError::Api {
            status,
            code: Some(4),
            message: Some(message.to_owned()),
            more_info: None,
        }
    }

    #[test]
    fn status_helpers_classify_server_errors() {
        assert!(api(404, "campaign not found").is_not_found());
        assert!(api(400, "name is required").is_validation_error());

        let err = CampaignsError::HttpStatus {
            status: 502,
            body: None,
        };
        assert_eq!(err.status(), Some(502));
        assert!(!err.is_validation_error());

        let err = CampaignsError::Validation(ValidationError::Empty { field: "user_id" });
        assert_eq!(err.status(), None);
    }

    #[test]
    fn campaign_state_prefers_marked_status() {
        let err = api(
            400,
            "campaign cannot be canceled because its status is completed",
        );
        assert_eq!(err.campaign_state(), Some(CampaignState::Completed));

        let err = api(400, "cannot send campaign: current status: in_progress");
        assert_eq!(err.campaign_state(), Some(CampaignState::InProgress));
    }

    #[test]
    fn campaign_state_falls_back_to_last_state_name() {
        let err = api(400, "cannot cancel a \"pending\" campaign");
        assert_eq!(err.campaign_state(), Some(CampaignState::Pending));
    }

    #[test]
    fn campaign_state_is_none_without_state_names() {
        assert_eq!(api(400, "userIds must not be empty").campaign_state(), None);
        let err = CampaignsError::HttpStatus {
            status: 400,
            body: Some("scheduled".to_owned()),
        };
        assert_eq!(err.campaign_state(), None);
    }
}
