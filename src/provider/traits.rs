//! Trait abstraction for the site data provider to enable mocking in tests

use crate::state::{Confirmation, FormValues, Project, Service, Stat, TeamMember, Testimonial};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fallback message when the provider reports a failure without one
pub const GENERIC_FAILURE: &str = "Something went wrong.";

/// Response envelope shared by every provider operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Successful envelope carrying `data`
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Provider-reported failure
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }

    /// Message to surface when the envelope is not a success
    pub fn failure_message(&self) -> String {
        self.error
            .as_deref()
            .filter(|message| !message.is_empty())
            .unwrap_or(GENERIC_FAILURE)
            .to_string()
    }

    /// Unwrap the envelope into its data or the message to surface
    pub fn into_outcome(self) -> Result<T, String> {
        match self.data {
            Some(data) if self.success => Ok(data),
            _ => Err(self.failure_message()),
        }
    }
}

/// Transport-level failure: the call never produced an envelope
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("request to {path} failed: {message}")]
    Transport { path: String, message: String },

    #[error("request to {path} timed out")]
    Timeout { path: String },

    #[error("{path} returned HTTP {status}")]
    Status { path: String, status: u16 },

    #[error("could not decode response from {path}: {message}")]
    Decode { path: String, message: String },
}

/// Result of a provider call
pub type ProviderResult<T> = Result<ApiResponse<T>, ProviderError>;

/// Read and write operations the site controllers consume
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DataProvider: Send + Sync {
    /// Headline figures
    async fn get_stats(&self) -> ProviderResult<Vec<Stat>>;

    /// Service catalogue
    async fn get_services(&self) -> ProviderResult<Vec<Service>>;

    /// Portfolio projects
    async fn get_projects(&self) -> ProviderResult<Vec<Project>>;

    /// Core team
    async fn get_team(&self) -> ProviderResult<Vec<TeamMember>>;

    /// Client testimonials
    async fn get_testimonials(&self) -> ProviderResult<Vec<Testimonial>>;

    /// Submit the contact form
    async fn submit_contact_inquiry(&self, payload: FormValues) -> ProviderResult<Confirmation>;

    /// Submit the developer network application
    async fn submit_developer_application(
        &self,
        payload: FormValues,
    ) -> ProviderResult<Confirmation>;

    /// Submit the partnership request
    async fn submit_partnership_request(&self, payload: FormValues)
        -> ProviderResult<Confirmation>;
}
