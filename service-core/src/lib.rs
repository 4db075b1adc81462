//! service-core: Shared infrastructure for the content ideas services.
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;
