//! Data provider module
//!
//! The [`DataProvider`] trait plus the fixture-backed and HTTP-backed
//! implementations.

mod fixture;
mod fixtures;
mod http;
mod traits;

pub use fixture::FixtureProvider;
pub use http::{HttpProvider, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use traits::{ApiResponse, DataProvider, ProviderError, ProviderResult, GENERIC_FAILURE};

#[cfg(test)]
pub use traits::MockDataProvider;
