use std::collections::HashMap;
use crate::models::{CompanyCount, ContactRecord, SynergisticContact, SynergyBreakdown};

/// Count retained contacts per synergy category
///
/// `other` is everything that was not retained, so
/// `retained.len() + other == total_contacts` always holds.
pub fn synergy_breakdown(total_contacts: usize, retained: &[SynergisticContact]) -> SynergyBreakdown {
    let count = |pred: fn(&SynergisticContact) -> bool| retained.iter().filter(|c| pred(c)).count();

    SynergyBreakdown {
        company: count(|c| c.synergy.company),
        industry: count(|c| c.synergy.industry),
        title: count(|c| c.synergy.has_title_synergy()),
        other: total_contacts.saturating_sub(retained.len()),
    }
}

/// Most frequent companies, highest count first
///
/// Blank company names are not counted. Ties keep first-seen order.
pub fn top_companies<'a, I>(companies: I, limit: usize) -> Vec<CompanyCount>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for company in companies {
        if company.trim().is_empty() {
            continue;
        }
        let entry = counts.entry(company).or_insert(0);
        if *entry == 0 {
            order.push(company);
        }
        *entry += 1;
    }

    let mut ranked: Vec<CompanyCount> = order
        .into_iter()
        .map(|company| CompanyCount {
            company: company.to_string(),
            connections: counts[company],
        })
        .collect();

    // Stable sort keeps first-seen order among equal counts
    ranked.sort_by(|a, b| b.connections.cmp(&a.connections));
    ranked.truncate(limit);
    ranked
}

/// Distinct non-blank companies in first-seen order
pub fn company_options(contacts: &[ContactRecord]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    contacts
        .iter()
        .map(|c| c.company.as_str())
        .filter(|company| !company.trim().is_empty())
        .filter(|company| seen.insert(*company))
        .map(str::to_string)
        .collect()
}
