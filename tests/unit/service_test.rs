//! AnalyzerService pipeline tests with scripted backends

use std::time::Duration;

use logdigest::analyzer::{AnalyzeOptions, ChunkOutcome, MockBackend, REPEATED_ERRORS};
use logdigest::{AnalyzerService, LogDocument};

use crate::helpers::{fast_options, rate_limited, service, service_error, ScriptedBackend};

// ============================================
// End-to-end scenarios
// ============================================

#[test]
fn mock_backend_single_file_550_chars() {
    let service = AnalyzerService::new(fast_options(), Box::new(MockBackend::new())).unwrap();
    let doc = LogDocument::new("a.log", "e".repeat(550));

    let run = service.run(&[doc]);
    let report = run.report();

    assert_eq!(report.len(), 2);
    for entry in report.entries() {
        assert!(entry.starts_with("Log Analyze: "), "entry: {}", entry);
    }
    assert_eq!(report.render().matches("\n\n").count(), 1);
}

#[test]
fn no_documents_no_calls_empty_report() {
    let backend = ScriptedBackend::default();
    let (service, sleeper) = service(fast_options(), &backend);

    let run = service.run(&[]);

    assert_eq!(run.report().render(), "");
    assert!(backend.calls().is_empty());
    assert!(sleeper.requested().is_empty());
}

#[test]
fn rate_limited_twice_then_success() {
    let backend = ScriptedBackend::new(vec![
        Err(rate_limited()),
        Err(rate_limited()),
        Ok("analysis".to_string()),
    ]);
    let (service, sleeper) = service(fast_options(), &backend);

    let run = service.run(&[LogDocument::new("a.log", "one chunk")]);

    assert_eq!(run.report().render(), "analysis");
    assert_eq!(backend.calls().len(), 3);
    assert_eq!(
        sleeper.requested(),
        vec![Duration::from_secs(1), Duration::from_secs(2), Duration::ZERO]
    );
}

#[test]
fn service_error_does_not_stop_later_chunks() {
    let backend = ScriptedBackend::new(vec![
        Ok("A".to_string()),
        Err(service_error("boom")),
        Ok("C".to_string()),
    ]);
    let options = fast_options().chunking(5, 0);
    let (service, _) = service(options, &backend);

    let run = service.run(&[LogDocument::new("a.log", "aaaaabbbbbccccc")]);
    let report = run.report();

    assert_eq!(report.len(), 3);
    assert_eq!(report.entries()[0], "A");
    assert!(report.entries()[1].starts_with("Log analysis failed due to"));
    assert_eq!(report.entries()[2], "C");
    // The failed chunk was attempted once
    assert_eq!(backend.calls().len(), 3);
}

// ============================================
// Retry limits
// ============================================

#[test]
fn always_rate_limited_exhausts_five_attempts() {
    let backend = ScriptedBackend::new((0..10).map(|_| Err(rate_limited())).collect());
    let (service, sleeper) = service(fast_options(), &backend);

    let run = service.run(&[LogDocument::new("a.log", "x")]);

    assert_eq!(backend.calls().len(), 5);
    assert_eq!(
        run.results[0].outcome,
        ChunkOutcome::failure(REPEATED_ERRORS)
    );
    let backoff: Vec<u64> = sleeper
        .requested()
        .iter()
        .filter(|d| !d.is_zero())
        .map(|d| d.as_secs())
        .collect();
    assert_eq!(backoff, vec![1, 2, 4, 8]);
}

#[test]
fn zero_retries_makes_no_calls() {
    let backend = ScriptedBackend::default();
    let (service, _) = service(fast_options().max_retries(0), &backend);

    let run = service.run(&[LogDocument::new("a.log", "x")]);

    assert!(backend.calls().is_empty());
    assert_eq!(
        run.report().render(),
        "Log analysis failed due to repeated errors."
    );
}

#[test]
fn backoff_base_scales_delays() {
    let backend = ScriptedBackend::new(vec![Err(rate_limited()), Ok("ok".to_string())]);
    let options = fast_options().backoff(Duration::from_millis(10));
    let (service, sleeper) = service(options, &backend);

    service.run(&[LogDocument::new("a.log", "x")]);

    assert_eq!(sleeper.requested()[0], Duration::from_millis(10));
}

// ============================================
// Ordering and pacing
// ============================================

#[test]
fn documents_processed_in_given_order() {
    let backend = ScriptedBackend::default();
    let (service, _) = service(fast_options(), &backend);

    let run = service.run(&[
        LogDocument::new("a.log", "first"),
        LogDocument::new("b.log", "second"),
    ]);

    assert_eq!(backend.calls(), vec!["first", "second"]);
    assert_eq!(run.report().render(), "echo:first\n\necho:second");
}

#[test]
fn pacing_follows_every_chunk() {
    let backend = ScriptedBackend::default();
    let options = AnalyzeOptions::default()
        .quiet()
        .chunking(4, 2)
        .pacing(Duration::from_millis(250));
    let (service, sleeper) = service(options, &backend);

    // 8 chars, size 4, step 2: chunks at 0, 2, 4
    service.run(&[LogDocument::new("a.log", "abcdefgh")]);

    assert_eq!(backend.calls(), vec!["abcd", "cdef", "efgh"]);
    assert_eq!(sleeper.requested(), vec![Duration::from_millis(250); 3]);
}

#[test]
fn backend_receives_raw_chunk_text() {
    let backend = ScriptedBackend::default();
    let (service, _) = service(fast_options().chunking(5, 1), &backend);

    service.run(&[LogDocument::new("a.log", "ERROR: disk full")]);

    let calls = backend.calls();
    assert_eq!(calls[0], "ERROR");
    assert!(calls.iter().all(|c| c.chars().count() <= 5));
}

#[test]
fn invalid_chunking_fails_before_processing() {
    let backend = ScriptedBackend::default();
    let result = AnalyzerService::new(fast_options().chunking(0, 0), Box::new(backend.clone()));

    assert!(result.is_err());
    assert!(backend.calls().is_empty());
}
