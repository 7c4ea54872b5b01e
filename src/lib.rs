//! Network Synergy - contact network analysis service
//!
//! Reads a contacts export of unknown delimiter, compares every contact with the
//! operator's professional profile and aggregates the matches into chart data,
//! detail cards and a career path graph.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{IngestError, Ingestor, Pipeline, SynergyMatcher};
pub use crate::models::{AnalysisRequest, AnalyzeResponse, ContactRecord, SynergyResult, UserProfile};
