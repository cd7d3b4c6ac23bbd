//! Simulated SQL store tests

use std::time::Duration;
use wiring_domain::ports::DocumentDb;
use wiring_infrastructure::config::DocumentsConfig;
use wiring_providers::document::SimulatedSqlDocumentDb;

#[tokio::test(start_paused = true)]
async fn test_lookup_waits_for_latency() {
    let db = SimulatedSqlDocumentDb::new(Duration::from_secs(5));
    let start = tokio::time::Instant::now();

    let document = db.get_by_id("42").await.expect("lookup succeeds");

    assert!(start.elapsed() >= Duration::from_secs(5));
    let document = document.expect("simulated store never misses");
    assert_eq!(document.id, "42");
    assert_eq!(document.title, "Document 42");
}

#[tokio::test]
async fn test_counts_calls() {
    let db = SimulatedSqlDocumentDb::new(Duration::ZERO);

    db.get_by_id("1").await.unwrap();
    db.get_by_id("1").await.unwrap();

    assert_eq!(db.calls(), 2);
}

#[test]
fn test_from_config_uses_configured_latency() {
    let config = DocumentsConfig {
        latency_ms: 25,
        audit: false,
    };

    let db = SimulatedSqlDocumentDb::from_config(&config);

    assert_eq!(db.latency(), Duration::from_millis(25));
    assert_eq!(db.provider_name(), "sql");
}
