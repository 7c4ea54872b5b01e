use crate::models::{
    Analysis, AnalysisRequest, AnalyzeResponse, ContactDetail,
};
use crate::core::{
    graph::PathGraph,
    ingest::{IngestError, Ingestor},
    matcher::SynergyMatcher,
    summary::{company_options, synergy_breakdown, top_companies},
};

/// How many companies each chart shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartLimits {
    pub synergy_companies: usize,
    pub network_companies: usize,
}

impl Default for ChartLimits {
    fn default() -> Self {
        Self {
            synergy_companies: 5,
            network_companies: 10,
        }
    }
}

/// Single-pass analysis: ingest, evaluate, aggregate
///
/// # Stages
/// 1. Profile gate (no-op until all three fields are supplied)
/// 2. Lenient ingestion of the contacts export
/// 3. Synergy evaluation and retention
/// 4. Chart aggregation, career path graph and detail cards
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    ingestor: Ingestor,
    matcher: SynergyMatcher,
    limits: ChartLimits,
}

impl Pipeline {
    pub fn new(matcher: SynergyMatcher, limits: ChartLimits) -> Self {
        Self {
            ingestor: Ingestor::new(),
            matcher,
            limits,
        }
    }

    pub fn matcher(&self) -> &SynergyMatcher {
        &self.matcher
    }

    /// Run one analysis pass
    ///
    /// An incomplete profile is not an error: the file is left unread and the
    /// missing fields are reported back.
    pub fn run(&self, request: &AnalysisRequest) -> Result<AnalyzeResponse, IngestError> {
        let missing_fields = request.profile.missing_fields();
        if !missing_fields.is_empty() {
            tracing::debug!("Profile incomplete, skipping analysis: {:?}", missing_fields);
            return Ok(AnalyzeResponse::AwaitingProfile { missing_fields });
        }

        let analysis = self.analyze(request)?;
        Ok(AnalyzeResponse::Completed(Box::new(analysis)))
    }

    /// Analysis over a request whose profile is known to be complete
    pub fn analyze(&self, request: &AnalysisRequest) -> Result<Analysis, IngestError> {
        let profile = &request.profile;
        let ingestion = self.ingestor.ingest(request.contacts_file.as_bytes())?;
        let contacts = ingestion.contacts;
        let total_contacts = contacts.len();

        let retained = self.matcher.retain(profile, &contacts);
        let breakdown = synergy_breakdown(total_contacts, &retained);

        let top_synergy_companies = top_companies(
            retained.iter().map(|r| r.contact.company.as_str()),
            self.limits.synergy_companies,
        );
        let top_network_companies = top_companies(
            contacts.iter().map(|c| c.company.as_str()),
            self.limits.network_companies,
        );

        let graph = request
            .target()
            .map(|(company, role)| PathGraph::build(profile, &retained, company, role));

        let details = retained.iter().map(ContactDetail::from).collect();

        tracing::info!(
            "Analyzed {} contacts: {} synergistic, {} other",
            total_contacts,
            retained.len(),
            breakdown.other
        );

        Ok(Analysis {
            id: uuid::Uuid::new_v4(),
            generated_at: chrono::Utc::now(),
            format: ingestion.format,
            total_contacts,
            retained_contacts: retained.len(),
            breakdown,
            top_synergy_companies,
            top_network_companies,
            company_options: company_options(&contacts),
            graph,
            details,
        })
    }
}
