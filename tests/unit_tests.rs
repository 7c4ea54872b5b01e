// Unit tests for Network Synergy

use network_synergy::core::{
    ingest::{Ingestor, IngestError},
    matcher::SynergyMatcher,
    summary::{synergy_breakdown, top_companies},
};
use network_synergy::models::{ContactRecord, ParseFormat, UserProfile};

fn contact(company: &str, position: &str) -> ContactRecord {
    ContactRecord {
        first_name: "Test".to_string(),
        last_name: "Contact".to_string(),
        company: company.to_string(),
        position: position.to_string(),
        ..Default::default()
    }
}

#[test]
fn test_company_match_for_equal_normalized_strings() {
    let matcher = SynergyMatcher::default();

    for company in ["acme", "Acme Corp", "  Globex  ", "INITECH"] {
        let profile = UserProfile::new("Chef", company, "Food");
        let result = matcher.evaluate(&profile, &contact(&company.to_uppercase(), "Baker"));
        assert!(result.company, "company {:?} should match itself", company);
    }
}

#[test]
fn test_empty_title_disables_title_predicates() {
    let matcher = SynergyMatcher::default();
    let profile = UserProfile::new("", "Acme", "Software");

    for position in ["", "Software Engineer", "Product Manager", "Data Scientist"] {
        let result = matcher.evaluate(&profile, &contact("Globex", position));
        assert!(!result.title_match);
        assert!(!result.title_complementary);
    }
}

#[test]
fn test_title_substring_match() {
    let matcher = SynergyMatcher::default();
    let profile = UserProfile::new("engineer", "Acme", "Robotics");

    let result = matcher.evaluate(&profile, &contact("Globex", "senior software engineer"));
    assert!(result.title_match);
}

#[test]
fn test_short_titles_match_liberally() {
    let matcher = SynergyMatcher::default();
    let profile = UserProfile::new("PM", "Acme", "Robotics");

    let result = matcher.evaluate(&profile, &contact("Globex", "Senior PMO Lead"));
    assert!(result.title_match);
}

#[test]
fn test_complementary_lookup() {
    let matcher = SynergyMatcher::default();
    let profile = UserProfile::new("product manager", "Acme", "Robotics");

    assert!(matcher.evaluate(&profile, &contact("Globex", "software engineer ii")).title_complementary);
    assert!(!matcher.evaluate(&profile, &contact("Globex", "recruiter")).title_complementary);
}

#[test]
fn test_retention_rule() {
    let matcher = SynergyMatcher::default();
    let profile = UserProfile::new("Product Manager", "Acme", "Robotics");

    let none = contact("Globex", "Recruiter");
    let one = contact("Globex", "Robotics Technician");

    let result = matcher.evaluate(&profile, &one);
    assert!(result.industry);
    assert!(!result.company && !result.title_match && !result.title_complementary);

    let retained = matcher.retain(&profile, &[none, one.clone()]);
    assert_eq!(retained.len(), 1);
    assert_eq!(retained[0].contact, one);
}

#[test]
fn test_semicolon_ingestion_without_metadata() {
    let raw = "First Name;Last Name;URL;Email Address;Company;Position;Connected On\n\
               Ada;Lovelace;https://example.com/ada;ada@example.com;Analytical Engines;Programmer;10 Dec 1843\n\
               Charles;Babbage;;;Analytical Engines;Inventor;26 Dec 1791\n";

    let ingestion = Ingestor::new().ingest(raw.as_bytes()).unwrap();

    assert_eq!(ingestion.format, ParseFormat { delimiter: ';', skip_rows: 0 });
    assert_eq!(ingestion.contacts.len(), 2);
    assert_eq!(
        ingestion.contacts[0],
        ContactRecord {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            url: "https://example.com/ada".to_string(),
            email_address: "ada@example.com".to_string(),
            company: "Analytical Engines".to_string(),
            position: "Programmer".to_string(),
            connected_on: "10 Dec 1843".to_string(),
        }
    );
}

#[test]
fn test_header_text_is_ignored() {
    let raw = "z,y,x,w,v,u,t\nAda,Lovelace,,,Acme,Programmer,\n";

    let contacts = Ingestor::new().ingest(raw.as_bytes()).unwrap().contacts;

    assert_eq!(contacts[0].first_name, "Ada");
    assert_eq!(contacts[0].company, "Acme");
}

#[test]
fn test_unparsable_input_yields_parse_failure() {
    let raw = b"a single column\nof plain text\nand nothing else\n";
    assert!(matches!(Ingestor::new().ingest(raw), Err(IngestError::ParseFailure)));
}

#[test]
fn test_non_utf8_bytes_are_tolerated() {
    let mut raw = b"a,b,c,d,e,f,g\nJos".to_vec();
    raw.push(0xE9);
    raw.extend_from_slice(b",Doe,,,Acme,Chef,\n");

    let contacts = Ingestor::new().ingest(&raw).unwrap().contacts;
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].company, "Acme");
}

#[test]
fn test_aggregate_count_invariant() {
    let matcher = SynergyMatcher::default();
    let profile = UserProfile::new("Data Analyst", "Acme", "Banking");
    let contacts = vec![
        contact("Acme", "Teller"),
        contact("First Banking Co", "Clerk"),
        contact("Globex", "Business Analyst"),
        contact("Initech", "Chef"),
        contact("Hooli", "Gardener"),
    ];

    let retained = matcher.retain(&profile, &contacts);
    let breakdown = synergy_breakdown(contacts.len(), &retained);

    assert_eq!(retained.len(), 3);
    assert_eq!(retained.len() + breakdown.other, contacts.len());
}

#[test]
fn test_top_companies_skip_blank() {
    let top = top_companies(["", "  ", "Acme"], 10);
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].connections, 1);
}
