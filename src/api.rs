//! HTTP client for the CRM backend.
//!
//! One resource path per entity, defined here and nowhere else. The backend
//! speaks plain JSON: GET a collection, POST to create, PUT by identity to
//! update, DELETE by identity. Mutation responses are only checked for
//! success; callers re-fetch the collection instead of patching from the
//! response body.

use std::time::Duration;

use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::{ChannelPartner, Company, CompanyPayload, Lead, LeadPayload, PartnerPayload};

pub const LEADS_PATH: &str = "leads";
pub const COMPANIES_PATH: &str = "companies";
pub const PARTNERS_PATH: &str = "channelPartners";

/// Longest error-body slice carried into an [`ApiError::Status`].
const ERROR_BODY_LIMIT: usize = 200;

/// Failures surfaced to the app layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status} on /{path}: {body}")]
    Status { status: u16, path: String, body: String },

    #[error("Invalid response from /{path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Thin wrapper over a shared [`reqwest::Client`] bound to one base URL.
/// Cloning is cheap; the inner client is reference counted.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build the client from configuration. The base URL may carry a
    /// trailing slash; it is stripped so paths join cleanly.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent("estatelist/0.1.0")
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn fetch_leads(&self) -> Result<Vec<Lead>, ApiError> {
        self.get_list(LEADS_PATH).await
    }

    pub async fn fetch_companies(&self) -> Result<Vec<Company>, ApiError> {
        self.get_list(COMPANIES_PATH).await
    }

    pub async fn fetch_partners(&self) -> Result<Vec<ChannelPartner>, ApiError> {
        self.get_list(PARTNERS_PATH).await
    }

    pub async fn create_lead(&self, payload: &LeadPayload) -> Result<(), ApiError> {
        self.post_json(LEADS_PATH, payload).await
    }

    pub async fn update_lead(&self, id: &str, payload: &LeadPayload) -> Result<(), ApiError> {
        self.put_json(LEADS_PATH, id, payload).await
    }

    pub async fn delete_lead(&self, id: &str) -> Result<(), ApiError> {
        self.delete(LEADS_PATH, id).await
    }

    pub async fn create_company(&self, payload: &CompanyPayload) -> Result<(), ApiError> {
        self.post_json(COMPANIES_PATH, payload).await
    }

    pub async fn update_company(&self, id: &str, payload: &CompanyPayload) -> Result<(), ApiError> {
        self.put_json(COMPANIES_PATH, id, payload).await
    }

    pub async fn delete_company(&self, id: &str) -> Result<(), ApiError> {
        self.delete(COMPANIES_PATH, id).await
    }

    pub async fn create_partner(&self, payload: &PartnerPayload) -> Result<(), ApiError> {
        self.post_json(PARTNERS_PATH, payload).await
    }

    pub async fn update_partner(&self, id: &str, payload: &PartnerPayload) -> Result<(), ApiError> {
        self.put_json(PARTNERS_PATH, id, payload).await
    }

    pub async fn delete_partner(&self, id: &str) -> Result<(), ApiError> {
        self.delete(PARTNERS_PATH, id).await
    }

    fn collection_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn item_url(&self, path: &str, id: &str) -> String {
        format!("{}/{}/{}", self.base_url, path, id)
    }

    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let url = self.collection_url(path);
        debug!("GET {url}");
        let response = self.http.get(&url).send().await?;
        Self::decode(path, response).await
    }

    async fn post_json<T: Serialize>(&self, path: &str, payload: &T) -> Result<(), ApiError> {
        let url = self.collection_url(path);
        debug!("POST {url}");
        let response = self.http.post(&url).json(payload).send().await?;
        Self::check(path, response).await
    }

    async fn put_json<T: Serialize>(&self, path: &str, id: &str, payload: &T) -> Result<(), ApiError> {
        let url = self.item_url(path, id);
        debug!("PUT {url}");
        let response = self.http.put(&url).json(payload).send().await?;
        Self::check(path, response).await
    }

    async fn delete(&self, path: &str, id: &str) -> Result<(), ApiError> {
        let url = self.item_url(path, id);
        debug!("DELETE {url}");
        let response = self.http.delete(&url).send().await?;
        Self::check(path, response).await
    }

    /// Decode a 2xx body as JSON; anything else becomes a typed error.
    async fn decode<T: DeserializeOwned>(path: &str, response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                path: path.to_string(),
                body: snippet(&body),
            });
        }
        serde_json::from_str(&body).map_err(|source| ApiError::Decode {
            path: path.to_string(),
            source,
        })
    }

    /// Success check for mutations whose body we discard.
    async fn check(path: &str, response: reqwest::Response) -> Result<(), ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            status: status.as_u16(),
            path: path.to_string(),
            body: snippet(&body),
        })
    }
}

fn snippet(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.len() <= ERROR_BODY_LIMIT {
        trimmed.to_string()
    } else {
        let mut end = ERROR_BODY_LIMIT;
        while !trimmed.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}…", &trimmed[..end])
    }
}
