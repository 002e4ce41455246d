//! Core library for the `weather-report` CLI.
//!
//! This crate defines:
//! - Endpoint specs and provider URL building
//! - A transport abstraction and the reqwest-backed fetcher
//! - Normalization of raw JSON payloads into typed section models
//! - Pure formatters from models to display lines
//! - Report orchestration with per-section failure isolation
//!
//! It is used by `report-cli`, but can also be reused by other binaries
//! or services.

pub mod endpoint;
pub mod error;
pub mod fetch;
pub mod format;
pub mod locale;
pub mod model;
pub mod normalize;
pub mod report;

pub use endpoint::{EndpointSpec, Feature};
pub use error::ReportError;
pub use fetch::{HttpTransport, Transport};
pub use model::{Report, SectionBody, SectionReport};
pub use report::{ForecastStyle, build_report};
