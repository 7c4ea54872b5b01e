use serde::{Deserialize, Serialize};
use crate::core::graph::PathGraph;
use crate::models::domain::{CompanyCount, ContactDetail, ParseFormat, SynergyBreakdown};

/// Everything produced by one completed analysis pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    pub id: uuid::Uuid,
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub format: ParseFormat,
    pub total_contacts: usize,
    pub retained_contacts: usize,
    pub breakdown: SynergyBreakdown,
    pub top_synergy_companies: Vec<CompanyCount>,
    pub top_network_companies: Vec<CompanyCount>,
    pub company_options: Vec<String>,
    pub graph: Option<PathGraph>,
    pub details: Vec<ContactDetail>,
}

/// Response for the analyze endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnalyzeResponse {
    Completed(Box<Analysis>),
    AwaitingProfile { missing_fields: Vec<String> },
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
