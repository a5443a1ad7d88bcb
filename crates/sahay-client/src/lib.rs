//! Sahay Backend Client
//!
//! Thin blocking HTTP wrapper over the external decision service
//! (scheme eligibility, rejection-risk, submission). Payloads are opaque
//! JSON; this crate makes no claims about the backend's computation.

use std::time::Duration;

use serde::Serialize;
use serde_json::Value;
use url::Url;

/// Client error
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Invalid endpoint URL: {0}")]
    Url(String),

    #[error("Request failed: {0}")]
    Request(String),

    #[error("HTTP error: {0}")]
    Status(u16),

    #[error("Invalid response body: {0}")]
    Decode(String),
}

/// Body of an application submission, the one request shape the
/// dashboard owns
#[derive(Debug, Clone, Serialize)]
pub struct SubmitApplication<'a> {
    pub citizen_id: &'a str,
    pub scheme_id: &'a str,
}

/// Blocking client for the dashboard backend
pub struct BackendClient {
    base_url: Url,
    http: reqwest::blocking::Client,
}

impl BackendClient {
    /// Create a client for the service at `base_url`
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url).map_err(|e| ClientError::Url(e.to_string()))?;
        let http = reqwest::blocking::Client::builder()
            .user_agent("Sahay-Dashboard/0.1")
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ClientError::Request(e.to_string()))?;
        Ok(Self { base_url, http })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|e| ClientError::Url(e.to_string()))
    }

    fn get(&self, path: &str) -> Result<Value, ClientError> {
        let url = self.endpoint(path)?;
        log::debug!("GET {}", url);
        let response = self
            .http
            .get(url)
            .send()
            .map_err(|e| ClientError::Request(e.to_string()))?;
        decode(response)
    }

    fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<Value, ClientError> {
        let url = self.endpoint(path)?;
        log::debug!("POST {}", url);
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .map_err(|e| ClientError::Request(e.to_string()))?;
        decode(response)
    }

    /// Create or update a citizen profile
    pub fn submit_profile(&self, profile: &Value) -> Result<Value, ClientError> {
        self.post("/api/citizens/profile", profile)
    }

    /// Ranked scheme matches for a citizen profile
    pub fn discover_schemes(&self, profile: &Value) -> Result<Value, ClientError> {
        self.post("/api/schemes/discover", profile)
    }

    /// All published schemes
    pub fn list_schemes(&self) -> Result<Value, ClientError> {
        self.get("/api/schemes/")
    }

    /// Submit an application for a scheme
    pub fn submit_application(&self, citizen_id: &str, scheme_id: &str) -> Result<Value, ClientError> {
        let body = SubmitApplication { citizen_id, scheme_id };
        self.post("/api/applications/submit", &body)
    }

    /// Status of a submitted application
    pub fn application_status(&self, application_id: &str) -> Result<Value, ClientError> {
        self.get(&format!("/api/applications/{application_id}"))
    }
}

fn decode(response: reqwest::blocking::Response) -> Result<Value, ClientError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ClientError::Status(status.as_u16()));
    }
    response
        .json::<Value>()
        .map_err(|e| ClientError::Decode(e.to_string()))
}
