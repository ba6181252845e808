//! REST client for a live site backend
//!
//! Speaks the same JSON envelope as the fixture provider:
//! `{"success": bool, "data": ..., "error": "..."}`.

use super::traits::{ApiResponse, DataProvider, ProviderError, ProviderResult};
use crate::state::{Confirmation, FormValues, Project, Service, Stat, TeamMember, Testimonial};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// Default backend address
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

mod routes {
    pub const STATS: &str = "/api/stats";
    pub const SERVICES: &str = "/api/services";
    pub const PROJECTS: &str = "/api/projects";
    pub const TEAM: &str = "/api/team";
    pub const TESTIMONIALS: &str = "/api/testimonials";
    pub const CONTACT: &str = "/api/contact";
    pub const DEVELOPER: &str = "/api/applications/developer";
    pub const PARTNERSHIPS: &str = "/api/partnerships";
}

/// Provider backed by the site's HTTP API
#[derive(Debug, Clone)]
pub struct HttpProvider {
    http: Client,
    base_url: String,
}

impl HttpProvider {
    /// Create a client for `base_url` with a per-request timeout
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[allow(dead_code)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ProviderResult<T> {
        debug!(path, "GET");
        let response = self
            .http
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| request_error(path, e))?;
        decode(path, response).await
    }

    async fn post<T: DeserializeOwned>(&self, path: &str, payload: &FormValues) -> ProviderResult<T> {
        debug!(path, fields = payload.len(), "POST");
        let response = self
            .http
            .post(self.url(path))
            .json(payload)
            .send()
            .await
            .map_err(|e| request_error(path, e))?;
        decode(path, response).await
    }
}

fn request_error(path: &str, err: reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        ProviderError::Timeout {
            path: path.to_string(),
        }
    } else {
        ProviderError::Transport {
            path: path.to_string(),
            message: err.to_string(),
        }
    }
}

/// Decode an envelope. Error statuses whose body is still an envelope pass
/// through so the backend's message reaches the user.
async fn decode<T: DeserializeOwned>(path: &str, response: reqwest::Response) -> ProviderResult<T> {
    let status = response.status();
    let body = response.bytes().await.map_err(|e| request_error(path, e))?;

    match serde_json::from_slice::<ApiResponse<T>>(&body) {
        Ok(envelope) => {
            if !status.is_success() {
                warn!(path, status = status.as_u16(), "backend rejected request");
            }
            Ok(envelope)
        }
        Err(_) if !status.is_success() => Err(ProviderError::Status {
            path: path.to_string(),
            status: status.as_u16(),
        }),
        Err(e) => Err(ProviderError::Decode {
            path: path.to_string(),
            message: e.to_string(),
        }),
    }
}

#[async_trait]
impl DataProvider for HttpProvider {
    async fn get_stats(&self) -> ProviderResult<Vec<Stat>> {
        self.get(routes::STATS).await
    }

    async fn get_services(&self) -> ProviderResult<Vec<Service>> {
        self.get(routes::SERVICES).await
    }

    async fn get_projects(&self) -> ProviderResult<Vec<Project>> {
        self.get(routes::PROJECTS).await
    }

    async fn get_team(&self) -> ProviderResult<Vec<TeamMember>> {
        self.get(routes::TEAM).await
    }

    async fn get_testimonials(&self) -> ProviderResult<Vec<Testimonial>> {
        self.get(routes::TESTIMONIALS).await
    }

    async fn submit_contact_inquiry(&self, payload: FormValues) -> ProviderResult<Confirmation> {
        self.post(routes::CONTACT, &payload).await
    }

    async fn submit_developer_application(
        &self,
        payload: FormValues,
    ) -> ProviderResult<Confirmation> {
        self.post(routes::DEVELOPER, &payload).await
    }

    async fn submit_partnership_request(
        &self,
        payload: FormValues,
    ) -> ProviderResult<Confirmation> {
        self.post(routes::PARTNERSHIPS, &payload).await
    }
}
