//! Credit card recommendations from a static catalog and a short questionnaire.

pub mod advisor;
pub mod catalog;
pub mod config;
pub mod error;
pub mod preferences;
pub mod ranking;
pub mod scoring;
pub mod telemetry;
