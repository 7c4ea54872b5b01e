use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::UserProfile;

/// One analysis pass: operator profile, the raw contacts export and an optional
/// career target
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub profile: UserProfile,
    #[serde(alias = "contacts_file", rename = "contactsFile", default)]
    pub contacts_file: String,
    #[validate(length(max = 512))]
    #[serde(alias = "target_company", rename = "targetCompany", default)]
    pub target_company: Option<String>,
    #[validate(length(max = 512))]
    #[serde(alias = "target_role", rename = "targetRole", default)]
    pub target_role: Option<String>,
}

impl AnalysisRequest {
    pub fn new(profile: UserProfile, contacts_file: impl Into<String>) -> Self {
        Self {
            profile,
            contacts_file: contacts_file.into(),
            target_company: None,
            target_role: None,
        }
    }

    pub fn with_target(mut self, company: impl Into<String>, role: impl Into<String>) -> Self {
        self.target_company = Some(company.into());
        self.target_role = Some(role.into());
        self
    }

    /// Target company and role, only when both are present and non-empty
    pub fn target(&self) -> Option<(&str, &str)> {
        let company = self.target_company.as_deref().filter(|c| !c.is_empty())?;
        let role = self.target_role.as_deref().filter(|r| !r.is_empty())?;
        Some((company, role))
    }
}

/// Query string accompanying a raw file upload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UploadQuery {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub industry: String,
    #[validate(length(max = 512))]
    #[serde(alias = "targetCompany", default)]
    pub target_company: Option<String>,
    #[validate(length(max = 512))]
    #[serde(alias = "targetRole", default)]
    pub target_role: Option<String>,
}

impl UploadQuery {
    pub fn into_request(self, contacts_file: String) -> AnalysisRequest {
        AnalysisRequest {
            profile: UserProfile::new(self.title, self.company, self.industry),
            contacts_file,
            target_company: self.target_company,
            target_role: self.target_role,
        }
    }
}
