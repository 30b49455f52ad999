//! Prompt building for log analysis.

/// Build the analysis prompt for one chunk of log text.
///
/// Uses the template from `src/analyzer/prompts/analyze.txt`. The chunk is
/// embedded verbatim; chunking already bounds its size.
pub fn build_analyze_prompt(chunk_text: &str) -> String {
    // Include the template at compile time
    const TEMPLATE: &str = include_str!("prompts/analyze.txt");

    TEMPLATE.replace("{log_chunk}", chunk_text)
}
