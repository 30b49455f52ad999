//! Report aggregation tests

use logdigest::analyzer::{aggregate, ChunkOutcome, Report, REPEATED_ERRORS};

#[test]
fn failure_entries_use_fixed_sentence() {
    let outcome = ChunkOutcome::failure(REPEATED_ERRORS);
    assert_eq!(
        outcome.display(),
        "Log analysis failed due to repeated errors."
    );
}

#[test]
fn success_entries_are_the_analysis_text() {
    let outcome = ChunkOutcome::Success("Nothing unusual.".to_string());
    assert_eq!(outcome.display(), "Nothing unusual.");
}

#[test]
fn mixed_outcomes_keep_order_and_separator() {
    let outcomes = vec![
        ChunkOutcome::Success("first".to_string()),
        ChunkOutcome::failure("service error (HTTP 500): boom"),
        ChunkOutcome::Success("third".to_string()),
    ];

    let text = aggregate(&outcomes);

    assert_eq!(
        text,
        "first\n\nLog analysis failed due to service error (HTTP 500): boom.\n\nthird"
    );
    assert_eq!(Report::from_outcomes(&outcomes).render(), text);
}

#[test]
fn multiline_entries_are_not_altered() {
    let outcomes = vec![
        ChunkOutcome::Success("line one\nline two".to_string()),
        ChunkOutcome::Success("next".to_string()),
    ];
    assert_eq!(aggregate(&outcomes), "line one\nline two\n\nnext");
}
