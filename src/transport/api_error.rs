use serde::Deserialize;

/// Error envelope returned by the platform on non-2xx responses:
/// `{"code": 4, "message": "...", "StatusCode": 400, "more_info": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiErrorBody {
    pub code: Option<i64>,
    pub message: Option<String>,
    pub more_info: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorJson {
    #[serde(default)]
    code: Option<i64>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    more_info: Option<String>,
}

/// Decode the error envelope. Returns `None` when the body is not JSON or
/// carries neither a `code` nor a `message`.
pub fn decode_api_error(body: &str) -> Option<ApiErrorBody> {
    let parsed: ApiErrorJson = serde_json::from_str(body).ok()?;
    if parsed.code.is_none() && parsed.message.is_none() {
        return None;
    }
    Some(ApiErrorBody {
        code: parsed.code,
        message: parsed.message,
        more_info: parsed.more_info.filter(|it| !it.trim().is_empty()),
    })
}
