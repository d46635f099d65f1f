//! Transport layer: JSON wire format (request bodies, query pairs, response decoding).

mod api_error;
mod campaign;
mod error_entry;
mod lifecycle;
mod segment;

pub use api_error::decode_api_error;
pub use campaign::{
    decode_campaign_list_response, decode_campaign_response, encode_campaign_update,
    encode_new_campaign,
};
pub use lifecycle::{
    decode_campaign_preview_response, decode_campaign_status_response, encode_preview_query,
    encode_send_campaign_body, encode_test_campaign_body,
};
pub use segment::{
    decode_segment_list_response, decode_segment_response, encode_new_segment,
    encode_segment_update,
};

use crate::domain::{Pagination, ValidationError};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response contains an invalid {field}: {source}")]
    InvalidField {
        field: &'static str,
        #[source]
        source: ValidationError,
    },

    #[error("response is missing required field: {field}")]
    MissingField { field: &'static str },
}

pub fn encode_pagination_query(pagination: Pagination) -> Vec<(String, String)> {
    let mut query = Vec::new();
    if let Some(limit) = pagination.limit {
        query.push(("limit".to_owned(), limit.to_string()));
    }
    if let Some(offset) = pagination.offset {
        query.push(("offset".to_owned(), offset.to_string()));
    }
    query
}

fn invalid(field: &'static str) -> impl FnOnce(ValidationError) -> TransportError {
    move |source| TransportError::InvalidField { field, source }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_omits_unset_values() {
        assert!(encode_pagination_query(Pagination::default()).is_empty());
        assert_eq!(
            encode_pagination_query(Pagination::default().offset(20)),
            vec![("offset".to_owned(), "20".to_owned())]
        );
        assert_eq!(
            encode_pagination_query(Pagination::new(10, 0)),
            vec![
                ("limit".to_owned(), "10".to_owned()),
                ("offset".to_owned(), "0".to_owned()),
            ]
        );
    }
}
