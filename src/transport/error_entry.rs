use serde::Deserialize;
use serde_json::{Map, Value};

/// One entry of a campaign `errors` list, returned either as a plain string or
/// as an object carrying a `message` field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TransportErrorEntry {
    Text(String),
    Object(Map<String, Value>),
}

impl TransportErrorEntry {
    pub fn into_string(self) -> String {
        match self {
            Self::Text(value) => value,
            Self::Object(mut map) => match map.remove("message") {
                Some(Value::String(message)) => message,
                Some(other) => {
                    map.insert("message".to_owned(), other);
                    Value::Object(map).to_string()
                }
                None => Value::Object(map).to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> Vec<String> {
        serde_json::from_str::<Vec<TransportErrorEntry>>(json)
            .unwrap()
            .into_iter()
            .map(TransportErrorEntry::into_string)
            .collect()
    }

    #[test]
    fn accepts_strings_and_message_objects() {
        let errors = decode(r#"["rate limited", {"message": "user banned", "user_id": "u1"}]"#);
        assert_eq!(errors, vec!["rate limited", "user banned"]);
    }

    #[test]
    fn objects_without_message_keep_their_json() {
        let errors = decode(r#"[{"code": 17}]"#);
        assert_eq!(errors, vec![r#"{"code":17}"#]);
    }
}
