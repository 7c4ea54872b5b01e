// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    CompanyCount, ContactDetail, ContactRecord, ParseFormat, SynergisticContact, SynergyBreakdown,
    SynergyResult, UserProfile,
};
pub use requests::{AnalysisRequest, UploadQuery};
pub use responses::{Analysis, AnalyzeResponse, ErrorResponse, HealthResponse};
