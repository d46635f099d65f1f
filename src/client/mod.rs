//! Client layer: maps each campaign/segment operation to one HTTP call.

mod error;
mod http;

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

pub use error::CampaignsError;
use self::http::{HttpRequest, HttpResponse, HttpTransport, Method, ReqwestTransport};

use crate::domain::{
    ApiKey, AuthToken, Campaign, CampaignId, CampaignPreview, CampaignStatus, CampaignUpdate,
    NewCampaign, NewSegment, Pagination, Segment, SegmentId, SegmentUpdate, SendOptions,
    TemplateParams, UserId, ValidationError,
};

const DEFAULT_BASE_URL: &str = "https://chat.stream-io-api.com";
const DEFAULT_USER_AGENT: &str = concat!("stream-campaigns-rust/", env!("CARGO_PKG_VERSION"));

const API_KEY_ENV: &str = "STREAM_API_KEY";
const TOKEN_ENV: &str = "STREAM_TOKEN";

#[derive(Debug, Clone)]
/// Server-side credentials: the application API key plus a signed JWT.
///
/// Every request carries `api_key` as a query parameter and the token in the
/// `Authorization` header with `Stream-Auth-Type: jwt`.
pub struct Auth {
    api_key: ApiKey,
    token: AuthToken,
}

impl Auth {
    /// Create credentials, validating that both parts are non-empty.
    pub fn new(
        api_key: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            api_key: ApiKey::new(api_key)?,
            token: AuthToken::new(token)?,
        })
    }

    /// Read credentials from `STREAM_API_KEY` and `STREAM_TOKEN`.
    pub fn from_env() -> Result<Self, ValidationError> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| ValidationError::MissingEnv { var: API_KEY_ENV })?;
        let token =
            std::env::var(TOKEN_ENV).map_err(|_| ValidationError::MissingEnv { var: TOKEN_ENV })?;
        Self::new(api_key, token)
    }

    /// The application API key sent with every request.
    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    fn push_query(&self, url: &mut Url) {
        url.query_pairs_mut()
            .append_pair(ApiKey::FIELD, self.api_key.as_str());
    }

    fn headers(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Authorization", self.token.as_str().to_owned()),
            ("Stream-Auth-Type", "jwt".to_owned()),
        ]
    }
}

#[derive(Debug, Clone)]
/// Builder for [`CampaignsClient`].
///
/// Use this when you need to customize the base URL, timeout, or user-agent.
pub struct CampaignsClientBuilder {
    auth: Auth,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl CampaignsClientBuilder {
    /// Create a builder with the default base URL and no timeout or user-agent override.
    pub fn new(auth: Auth) -> Self {
        Self {
            auth,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the API base URL. Resource paths (`/segments`, `/campaigns`) are appended to it.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`CampaignsClient`], validating the base URL.
    pub fn build(self) -> Result<CampaignsClient, CampaignsError> {
        let parsed = Url::parse(&self.base_url)?;
        if parsed.cannot_be_a_base() {
            return Err(CampaignsError::InvalidBaseUrl { url: self.base_url });
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|err| CampaignsError::Transport(Box::new(err)))?;

        Ok(CampaignsClient {
            auth: self.auth,
            base_url: self.base_url,
            user_agent: self
                .user_agent
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned()),
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// Typed client for the campaigns and segments endpoints.
///
/// Each method performs exactly one request. The server owns validation and the
/// campaign lifecycle; rejections come back as [`CampaignsError::Api`] with the
/// HTTP status preserved. Nothing is cached or retried, and the client keeps no
/// state between calls, so clones can be used concurrently.
pub struct CampaignsClient {
    auth: Auth,
    base_url: String,
    user_agent: String,
    http: Arc<dyn HttpTransport>,
}

impl CampaignsClient {
    /// Create a client against the default base URL.
    ///
    /// For more customization, use [`CampaignsClient::builder`].
    pub fn new(auth: Auth) -> Self {
        Self {
            auth,
            base_url: DEFAULT_BASE_URL.to_owned(),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(auth: Auth) -> CampaignsClientBuilder {
        CampaignsClientBuilder::new(auth)
    }

    /// `POST /segments`.
    ///
    /// Errors: 400 when `name` or `description` is missing or the filter is empty/malformed.
    pub async fn create_segment(&self, segment: NewSegment) -> Result<Segment, CampaignsError> {
        let body = crate::transport::encode_new_segment(&segment);
        let response = self
            .execute(Method::Post, &["segments"], Vec::new(), Some(body))
            .await?;
        crate::transport::decode_segment_response(&response).map_err(parse_error)
    }

    /// `GET /segments/{id}`. Errors: 404 when the segment does not exist.
    pub async fn get_segment(&self, id: &SegmentId) -> Result<Segment, CampaignsError> {
        let response = self
            .execute(Method::Get, &["segments", id.as_str()], Vec::new(), None)
            .await?;
        crate::transport::decode_segment_response(&response).map_err(parse_error)
    }

    /// `GET /segments?limit&offset`. An empty collection is returned as an empty `Vec`.
    pub async fn list_segments(
        &self,
        pagination: Pagination,
    ) -> Result<Vec<Segment>, CampaignsError> {
        let query = crate::transport::encode_pagination_query(pagination);
        let response = self
            .execute(Method::Get, &["segments"], query, None)
            .await?;
        crate::transport::decode_segment_list_response(&response).map_err(parse_error)
    }

    /// `PUT /segments/{id}` with only the set fields.
    ///
    /// Errors: 400 for an empty update, 404 for an unknown id.
    pub async fn update_segment(
        &self,
        id: &SegmentId,
        update: SegmentUpdate,
    ) -> Result<Segment, CampaignsError> {
        let body = crate::transport::encode_segment_update(&update);
        let response = self
            .execute(Method::Put, &["segments", id.as_str()], Vec::new(), Some(body))
            .await?;
        crate::transport::decode_segment_response(&response).map_err(parse_error)
    }

    /// `DELETE /segments/{id}`. Campaigns referencing the segment are not deleted.
    pub async fn delete_segment(&self, id: &SegmentId) -> Result<(), CampaignsError> {
        self.execute(Method::Delete, &["segments", id.as_str()], Vec::new(), None)
            .await?;
        Ok(())
    }

    /// `POST /campaigns`.
    ///
    /// Errors: 400 when the segment does not resolve or the message is empty.
    pub async fn create_campaign(
        &self,
        campaign: NewCampaign,
    ) -> Result<Campaign, CampaignsError> {
        let body = crate::transport::encode_new_campaign(&campaign);
        let response = self
            .execute(Method::Post, &["campaigns"], Vec::new(), Some(body))
            .await?;
        crate::transport::decode_campaign_response(&response).map_err(parse_error)
    }

    /// `GET /campaigns/{id}`. Errors: 404 when the campaign does not exist.
    pub async fn get_campaign(&self, id: &CampaignId) -> Result<Campaign, CampaignsError> {
        let response = self
            .execute(Method::Get, &["campaigns", id.as_str()], Vec::new(), None)
            .await?;
        crate::transport::decode_campaign_response(&response).map_err(parse_error)
    }

    /// `GET /campaigns?limit&offset`. An empty collection is returned as an empty `Vec`.
    pub async fn list_campaigns(
        &self,
        pagination: Pagination,
    ) -> Result<Vec<Campaign>, CampaignsError> {
        let query = crate::transport::encode_pagination_query(pagination);
        let response = self
            .execute(Method::Get, &["campaigns"], query, None)
            .await?;
        crate::transport::decode_campaign_list_response(&response).map_err(parse_error)
    }

    /// `PUT /campaigns/{id}` with only the set fields.
    ///
    /// Errors: 404 for an unknown campaign, 400 for an empty update or an
    /// unresolvable `segment_id`.
    pub async fn update_campaign(
        &self,
        id: &CampaignId,
        update: CampaignUpdate,
    ) -> Result<Campaign, CampaignsError> {
        let body = crate::transport::encode_campaign_update(&update);
        let response = self
            .execute(
                Method::Put,
                &["campaigns", id.as_str()],
                Vec::new(),
                Some(body),
            )
            .await?;
        crate::transport::decode_campaign_response(&response).map_err(parse_error)
    }

    /// `DELETE /campaigns/{id}`. The referenced segment is kept.
    pub async fn delete_campaign(&self, id: &CampaignId) -> Result<(), CampaignsError> {
        self.execute(Method::Delete, &["campaigns", id.as_str()], Vec::new(), None)
            .await?;
        Ok(())
    }

    /// `POST /campaigns/{id}/send`.
    ///
    /// Accepted from `pending`, `failed` and `canceled` (the campaign becomes
    /// `scheduled`). Other states are rejected with a 400 that names the current
    /// status; see [`CampaignsError::campaign_state`].
    pub async fn send_campaign(
        &self,
        id: &CampaignId,
        options: SendOptions,
    ) -> Result<CampaignStatus, CampaignsError> {
        let body = crate::transport::encode_send_campaign_body(&options);
        let response = self
            .execute(
                Method::Post,
                &["campaigns", id.as_str(), "send"],
                Vec::new(),
                Some(body),
            )
            .await?;
        crate::transport::decode_campaign_status_response(&response).map_err(parse_error)
    }

    /// `GET /campaigns/{id}/preview`: render the message template against sample data.
    pub async fn preview_campaign(
        &self,
        id: &CampaignId,
        params: TemplateParams,
    ) -> Result<CampaignPreview, CampaignsError> {
        let query = crate::transport::encode_preview_query(&params);
        let response = self
            .execute(Method::Get, &["campaigns", id.as_str(), "preview"], query, None)
            .await?;
        crate::transport::decode_campaign_preview_response(id, &response).map_err(parse_error)
    }

    /// `GET /campaigns/{id}/status`: progress, timestamps and errors.
    pub async fn get_campaign_status(
        &self,
        id: &CampaignId,
    ) -> Result<CampaignStatus, CampaignsError> {
        let response = self
            .execute(
                Method::Get,
                &["campaigns", id.as_str(), "status"],
                Vec::new(),
                None,
            )
            .await?;
        crate::transport::decode_campaign_status_response(&response).map_err(parse_error)
    }

    /// `POST /campaigns/{id}/cancel`.
    ///
    /// Accepted from `scheduled` and `in_progress` only.
    pub async fn cancel_campaign(&self, id: &CampaignId) -> Result<CampaignStatus, CampaignsError> {
        let response = self
            .execute(
                Method::Post,
                &["campaigns", id.as_str(), "cancel"],
                Vec::new(),
                None,
            )
            .await?;
        crate::transport::decode_campaign_status_response(&response).map_err(parse_error)
    }

    /// `POST /campaigns/{id}/test`: send to explicit users, bypassing the segment.
    ///
    /// Errors: 400 when `user_ids` is empty or above the server's limit.
    pub async fn send_test_campaign(
        &self,
        id: &CampaignId,
        user_ids: Vec<UserId>,
    ) -> Result<CampaignStatus, CampaignsError> {
        let body = crate::transport::encode_test_campaign_body(&user_ids);
        let response = self
            .execute(
                Method::Post,
                &["campaigns", id.as_str(), "test"],
                Vec::new(),
                Some(body),
            )
            .await?;
        crate::transport::decode_campaign_status_response(&response).map_err(parse_error)
    }

    fn url(&self, path: &[&str], query: Vec<(String, String)>) -> Result<Url, CampaignsError> {
        let mut url = Url::parse(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|()| CampaignsError::InvalidBaseUrl {
                url: self.base_url.clone(),
            })?
            .pop_if_empty()
            .extend(path);

        self.auth.push_query(&mut url);
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    async fn execute(
        &self,
        method: Method,
        path: &[&str],
        query: Vec<(String, String)>,
        body: Option<Value>,
    ) -> Result<String, CampaignsError> {
        let url = self.url(path, query)?;
        debug!(method = %method, path = url.path(), "sending campaigns API request");

        let mut headers = self.auth.headers();
        headers.push(("User-Agent", self.user_agent.clone()));
        let request = HttpRequest {
            method,
            url,
            headers,
            body,
        };
        let response = self
            .http
            .send(request)
            .await
            .map_err(CampaignsError::Transport)?;

        debug!(method = %method, status = response.status, "received campaigns API response");
        if !(200..=299).contains(&response.status) {
            warn!(method = %method, status = response.status, "campaigns API request failed");
            return Err(error_from_response(response));
        }

        Ok(response.body)
    }
}

fn error_from_response(response: HttpResponse) -> CampaignsError {
    match crate::transport::decode_api_error(&response.body) {
        Some(api) => CampaignsError::Api {
            status: response.status,
            code: api.code,
            message: api.message,
            more_info: api.more_info,
        },
        None => {
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            CampaignsError::HttpStatus {
                status: response.status,
                body,
            }
        }
    }
}

fn parse_error(err: crate::transport::TransportError) -> CampaignsError {
    CampaignsError::Parse(Box::new(err))
}
