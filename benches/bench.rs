// Criterion benchmarks for Network Synergy

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use network_synergy::core::{Ingestor, Pipeline, SynergyMatcher};
use network_synergy::models::{AnalysisRequest, ContactRecord, UserProfile};

const COMPANIES: [&str; 5] = ["Acme", "Globex", "Initech", "Hooli", "Manulife Bank"];
const POSITIONS: [&str; 5] = [
    "Software Engineer",
    "Recruiter",
    "Financial Analyst",
    "Product Manager",
    "UX Designer",
];

fn create_contact(id: usize) -> ContactRecord {
    ContactRecord {
        first_name: format!("First{}", id),
        last_name: format!("Last{}", id),
        url: format!("https://www.linkedin.com/in/contact-{}", id),
        email_address: String::new(),
        company: COMPANIES[id % COMPANIES.len()].to_string(),
        position: POSITIONS[id % POSITIONS.len()].to_string(),
        connected_on: "01 Jan 2024".to_string(),
    }
}

fn create_export(rows: usize) -> String {
    let mut export = String::from(
        "Notes:\n\"Some emails may be missing.\"\n\nFirst Name,Last Name,URL,Email Address,Company,Position,Connected On\n",
    );
    for contact in (0..rows).map(create_contact) {
        export.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            contact.first_name,
            contact.last_name,
            contact.url,
            contact.email_address,
            contact.company,
            contact.position,
            contact.connected_on
        ));
    }
    export
}

fn profile() -> UserProfile {
    UserProfile::new("Product Manager", "Manulife Bank", "Financial")
}

fn bench_evaluate(c: &mut Criterion) {
    let matcher = SynergyMatcher::default();
    let profile = profile();
    let contact = create_contact(0);

    c.bench_function("evaluate_single_contact", |b| {
        b.iter(|| matcher.evaluate(black_box(&profile), black_box(&contact)));
    });
}

fn bench_ingest(c: &mut Criterion) {
    let ingestor = Ingestor::new();
    let mut group = c.benchmark_group("ingest");

    for row_count in [10, 100, 1000, 5000].iter() {
        let export = create_export(*row_count);

        group.bench_with_input(
            BenchmarkId::new("linkedin_export", row_count),
            row_count,
            |b, _| {
                b.iter(|| ingestor.ingest(black_box(export.as_bytes())));
            },
        );
    }

    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let pipeline = Pipeline::default();
    let request = AnalysisRequest::new(profile(), create_export(1000))
        .with_target("Globex", "Software Engineer");

    c.bench_function("pipeline_1000_contacts", |b| {
        b.iter(|| pipeline.run(black_box(&request)));
    });
}

criterion_group!(
    benches,
    bench_evaluate,
    bench_ingest,
    bench_pipeline
);

criterion_main!(benches);
