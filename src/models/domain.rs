use serde::{Deserialize, Serialize};
use validator::Validate;

/// Operator's self-described professional profile
///
/// All three fields must be non-empty before any contact is evaluated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UserProfile {
    #[validate(length(min = 1))]
    #[serde(default)]
    pub title: String,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub company: String,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub industry: String,
}

impl UserProfile {
    pub fn new(title: impl Into<String>, company: impl Into<String>, industry: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            company: company.into(),
            industry: industry.into(),
        }
    }

    /// Names of the required fields that are still empty, in declaration order
    pub fn missing_fields(&self) -> Vec<String> {
        let errors = match self.validate() {
            Ok(()) => return vec![],
            Err(errors) => errors,
        };

        let field_errors = errors.field_errors();
        ["title", "company", "industry"]
            .iter()
            .filter(|field| field_errors.contains_key(**field))
            .map(|field| field.to_string())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }
}

/// One imported contact, fields in the export's positional order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub first_name: String,
    pub last_name: String,
    pub url: String,
    pub email_address: String,
    pub company: String,
    pub position: String,
    pub connected_on: String,
}

impl ContactRecord {
    /// Canonical column order of the contacts export
    pub const COLUMNS: [&'static str; 7] = [
        "first_name",
        "last_name",
        "url",
        "email_address",
        "company",
        "position",
        "connected_on",
    ];

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Outcome of the four synergy predicates for one contact
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynergyResult {
    pub company: bool,
    pub industry: bool,
    pub title_match: bool,
    pub title_complementary: bool,
}

impl SynergyResult {
    pub fn is_synergistic(&self) -> bool {
        self.company || self.industry || self.title_match || self.title_complementary
    }

    /// Either of the title predicates
    pub fn has_title_synergy(&self) -> bool {
        self.title_match || self.title_complementary
    }

    /// Human-readable names of the predicates that matched
    ///
    /// e.g. `title_match` becomes "Title Match". A contact with a blank
    /// position reports "Title Match" too, since the empty position is
    /// contained in every title.
    pub fn reasons(&self) -> Vec<String> {
        [
            ("company", self.company),
            ("industry", self.industry),
            ("title_match", self.title_match),
            ("title_complementary", self.title_complementary),
        ]
        .iter()
        .filter(|(_, matched)| *matched)
        .map(|(name, _)| title_case(name))
        .collect()
    }
}

fn title_case(name: &str) -> String {
    name.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// A contact retained because at least one predicate matched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynergisticContact {
    #[serde(flatten)]
    pub contact: ContactRecord,
    pub synergy: SynergyResult,
}

/// Delimiter and header offset the ingestor settled on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseFormat {
    pub delimiter: char,
    pub skip_rows: usize,
}

/// Frequency of one company in a set of contacts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyCount {
    pub company: String,
    pub connections: usize,
}

/// Contact counts per synergy category
///
/// The company, industry and title buckets may overlap; `other` counts the
/// contacts that matched nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynergyBreakdown {
    pub company: usize,
    pub industry: usize,
    pub title: usize,
    pub other: usize,
}

/// Per-contact detail card
///
/// Blank positions show up here with a "Title Match" reason; exports often
/// leave the position column empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetail {
    pub name: String,
    pub company: String,
    pub position: String,
    pub url: Option<String>,
    pub connected_on: Option<String>,
    pub reasons: Vec<String>,
}

impl From<&SynergisticContact> for ContactDetail {
    fn from(retained: &SynergisticContact) -> Self {
        let contact = &retained.contact;
        Self {
            name: contact.display_name(),
            company: contact.company.clone(),
            position: contact.position.clone(),
            url: non_empty(&contact.url),
            connected_on: non_empty(&contact.connected_on),
            reasons: retained.synergy.reasons(),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
