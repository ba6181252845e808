//! In-process provider serving fixture content after a simulated delay

use super::fixtures;
use super::traits::{ApiResponse, DataProvider, ProviderResult};
use crate::state::{Confirmation, FormValues, Project, Service, Stat, TeamMember, Testimonial};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

/// Simulated round-trip times, in milliseconds
mod latency {
    pub const STATS: u64 = 500;
    pub const SERVICES: u64 = 600;
    pub const PROJECTS: u64 = 700;
    pub const TEAM: u64 = 500;
    pub const TESTIMONIALS: u64 = 400;
    pub const CONTACT: u64 = 1100;
    pub const DEVELOPER: u64 = 1200;
    pub const PARTNERSHIP: u64 = 1000;
}

/// Provider backed by [`fixtures`], standing in until a backend exists
#[derive(Debug, Clone)]
pub struct FixtureProvider {
    /// Multiplier applied to every simulated delay (0 disables delays)
    latency_scale: f64,
}

impl FixtureProvider {
    pub fn new(latency_scale: f64) -> Self {
        Self {
            latency_scale: latency_scale.max(0.0),
        }
    }

    /// Provider that answers immediately
    pub fn instant() -> Self {
        Self::new(0.0)
    }

    fn delay(&self, base_ms: u64) -> Duration {
        Duration::from_secs_f64(base_ms as f64 * self.latency_scale / 1000.0)
    }

    async fn simulate(&self, base_ms: u64) {
        let delay = self.delay(base_ms);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    fn receipt(prefix: &str, payload: &FormValues, status: Option<&str>) -> Confirmation {
        let id = confirmation_id(prefix);
        debug!(%id, fields = payload.len(), "fixture submission accepted");
        Confirmation {
            id,
            status: status.map(str::to_string),
        }
    }
}

impl Default for FixtureProvider {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// `PREFIX-` followed by six uppercase alphanumerics
pub fn confirmation_id(prefix: &str) -> String {
    let token = Uuid::new_v4().simple().to_string();
    format!("{prefix}-{}", token[..6].to_ascii_uppercase())
}

#[async_trait]
impl DataProvider for FixtureProvider {
    async fn get_stats(&self) -> ProviderResult<Vec<Stat>> {
        self.simulate(latency::STATS).await;
        Ok(ApiResponse::ok(fixtures::stats()))
    }

    async fn get_services(&self) -> ProviderResult<Vec<Service>> {
        self.simulate(latency::SERVICES).await;
        Ok(ApiResponse::ok(fixtures::services()))
    }

    async fn get_projects(&self) -> ProviderResult<Vec<Project>> {
        self.simulate(latency::PROJECTS).await;
        Ok(ApiResponse::ok(fixtures::projects()))
    }

    async fn get_team(&self) -> ProviderResult<Vec<TeamMember>> {
        self.simulate(latency::TEAM).await;
        Ok(ApiResponse::ok(fixtures::team()))
    }

    async fn get_testimonials(&self) -> ProviderResult<Vec<Testimonial>> {
        self.simulate(latency::TESTIMONIALS).await;
        Ok(ApiResponse::ok(fixtures::testimonials()))
    }

    async fn submit_contact_inquiry(&self, payload: FormValues) -> ProviderResult<Confirmation> {
        self.simulate(latency::CONTACT).await;
        Ok(ApiResponse::ok(Self::receipt("TKT", &payload, None)))
    }

    async fn submit_developer_application(
        &self,
        payload: FormValues,
    ) -> ProviderResult<Confirmation> {
        self.simulate(latency::DEVELOPER).await;
        Ok(ApiResponse::ok(Self::receipt("APP", &payload, Some("pending"))))
    }

    async fn submit_partnership_request(
        &self,
        payload: FormValues,
    ) -> ProviderResult<Confirmation> {
        self.simulate(latency::PARTNERSHIP).await;
        Ok(ApiResponse::ok(Self::receipt("PTR", &payload, None)))
    }
}
