use std::collections::HashMap;
use super::matcher::normalize;

/// Static lookup from a job title to the roles considered complementary to it
///
/// Keys and roles are stored normalized (trimmed, lowercase).
#[derive(Debug, Clone)]
pub struct ComplementaryRoleTable {
    roles: HashMap<String, Vec<String>>,
}

impl ComplementaryRoleTable {
    /// Table with no entries
    pub fn empty() -> Self {
        Self { roles: HashMap::new() }
    }

    /// Add or replace the complementary roles for `title`
    pub fn with_role<I, S>(mut self, title: &str, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let roles = roles.into_iter().map(|r| normalize(r.as_ref())).collect();
        self.roles.insert(normalize(title), roles);
        self
    }

    /// Complementary roles for an already normalized title
    pub fn lookup(&self, title: &str) -> Option<&[String]> {
        self.roles.get(title).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

impl Default for ComplementaryRoleTable {
    fn default() -> Self {
        Self::empty()
            .with_role(
                "product manager",
                ["software engineer", "ux designer", "data analyst"],
            )
            .with_role(
                "data analyst",
                ["data scientist", "business analyst", "financial analyst"],
            )
    }
}
