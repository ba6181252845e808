//! Controllers bound to the site's provider operations

use super::fetch::FetchController;
use super::forms::{FormKind, FormValues};
use super::models::{Confirmation, Project, Service, Stat, TeamMember, Testimonial};
use super::mutation::MutationController;
use crate::provider::DataProvider;
use std::sync::Arc;

/// Provider shared by every controller
pub type SharedProvider = Arc<dyn DataProvider>;

/// Submission controller for one of the lead forms
pub type Submission = MutationController<FormValues, Confirmation>;

pub fn stats(provider: &SharedProvider) -> FetchController<Vec<Stat>> {
    let provider = provider.clone();
    FetchController::new(move || {
        let provider = provider.clone();
        async move { provider.get_stats().await }
    })
    .named("stats")
    .started()
}

pub fn services(provider: &SharedProvider) -> FetchController<Vec<Service>> {
    let provider = provider.clone();
    FetchController::new(move || {
        let provider = provider.clone();
        async move { provider.get_services().await }
    })
    .named("services")
    .started()
}

pub fn projects(provider: &SharedProvider) -> FetchController<Vec<Project>> {
    let provider = provider.clone();
    FetchController::new(move || {
        let provider = provider.clone();
        async move { provider.get_projects().await }
    })
    .named("projects")
    .started()
}

pub fn team(provider: &SharedProvider) -> FetchController<Vec<TeamMember>> {
    let provider = provider.clone();
    FetchController::new(move || {
        let provider = provider.clone();
        async move { provider.get_team().await }
    })
    .named("team")
    .started()
}

pub fn testimonials(provider: &SharedProvider) -> FetchController<Vec<Testimonial>> {
    let provider = provider.clone();
    FetchController::new(move || {
        let provider = provider.clone();
        async move { provider.get_testimonials().await }
    })
    .named("testimonials")
    .started()
}

pub fn contact_inquiry(provider: &SharedProvider) -> Submission {
    let provider = provider.clone();
    MutationController::new(move |payload: FormValues| {
        let provider = provider.clone();
        async move { provider.submit_contact_inquiry(payload).await }
    })
    .named("contact")
}

pub fn developer_application(provider: &SharedProvider) -> Submission {
    let provider = provider.clone();
    MutationController::new(move |payload: FormValues| {
        let provider = provider.clone();
        async move { provider.submit_developer_application(payload).await }
    })
    .named("developer_application")
}

pub fn partnership_request(provider: &SharedProvider) -> Submission {
    let provider = provider.clone();
    MutationController::new(move |payload: FormValues| {
        let provider = provider.clone();
        async move { provider.submit_partnership_request(payload).await }
    })
    .named("partnership")
}

/// Submission controller for `kind`
pub fn submission(kind: FormKind, provider: &SharedProvider) -> Submission {
    match kind {
        FormKind::Contact => contact_inquiry(provider),
        FormKind::Join => developer_application(provider),
        FormKind::Partner => partnership_request(provider),
    }
}
