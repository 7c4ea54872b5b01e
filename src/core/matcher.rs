use crate::models::{ContactRecord, SynergisticContact, SynergyResult, UserProfile};
use super::roles::ComplementaryRoleTable;

/// Trim and lowercase text before comparison
#[inline]
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Evaluates the synergy predicates between the operator and each contact
///
/// # Predicates
/// 1. Same company
/// 2. Industry keyword in the contact's company or position
/// 3. Title contained in the position, or the other way round
/// 4. Position contains a role complementary to the operator's title
///
/// Callers must only evaluate against a complete profile (see
/// [`UserProfile::is_complete`]).
#[derive(Debug, Clone, Default)]
pub struct SynergyMatcher {
    roles: ComplementaryRoleTable,
}

impl SynergyMatcher {
    pub fn new(roles: ComplementaryRoleTable) -> Self {
        Self { roles }
    }

    pub fn roles(&self) -> &ComplementaryRoleTable {
        &self.roles
    }

    /// Compute all four predicates for one contact
    pub fn evaluate(&self, profile: &UserProfile, contact: &ContactRecord) -> SynergyResult {
        let user_company = normalize(&profile.company);
        let user_industry = normalize(&profile.industry);
        let user_title = normalize(&profile.title);

        let conn_company = normalize(&contact.company);
        let conn_position = normalize(&contact.position);

        let company = !conn_company.is_empty()
            && !user_company.is_empty()
            && conn_company == user_company;

        let industry = !user_industry.is_empty()
            && (conn_company.contains(&user_industry) || conn_position.contains(&user_industry));

        // Symmetric: an empty position is contained in any title
        let title_match = !user_title.is_empty()
            && (conn_position.contains(&user_title) || user_title.contains(&conn_position));

        let title_complementary = self
            .roles
            .lookup(&user_title)
            .map(|roles| roles.iter().any(|role| conn_position.contains(role.as_str())))
            .unwrap_or(false);

        SynergyResult {
            company,
            industry,
            title_match,
            title_complementary,
        }
    }

    /// Keep the contacts with at least one matching predicate, in input order
    pub fn retain(&self, profile: &UserProfile, contacts: &[ContactRecord]) -> Vec<SynergisticContact> {
        contacts
            .iter()
            .filter_map(|contact| {
                let synergy = self.evaluate(profile, contact);
                synergy.is_synergistic().then(|| SynergisticContact {
                    contact: contact.clone(),
                    synergy,
                })
            })
            .collect()
    }
}
