// Analysis pipeline: tokenize, rank, categorize, derive labels.
//
// Everything in this module tree is a pure computation over its arguments:
// no I/O, no storage, no failure modes. The pipeline is total: any string
// input, including the empty string, produces a valid result.

pub mod categories;
pub mod compare;
pub mod labels;
pub mod mask;
pub mod tokenizer;

use chrono::Utc;
use tracing::info;

use crate::models::{AnalysisResult, Platform};

/// Run the full pipeline on raw history text.
///
/// The sole computational entry point for the presentation layer. Minimum
/// input length is the caller's concern; empty or all-stop-word input
/// degrades to fallback labels rather than an error.
pub fn analyze_input(text: &str, platform: Platform) -> AnalysisResult {
    let tokens = tokenizer::tokenize(text);
    let keywords = tokenizer::rank_keywords(&tokens, tokenizer::MAX_KEYWORDS);
    let categories = categories::build_histogram(&keywords);
    let summary = labels::build_summary(&keywords, &categories);
    let catchphrase = labels::build_catchphrase(&keywords);
    let algo_type = labels::build_algo_type(&keywords, &categories);

    info!(
        platform = %platform,
        keywords = keywords.len(),
        categories = categories.len(),
        algo_type = %algo_type,
        "Analyzed history text"
    );

    AnalysisResult {
        platform,
        input_text: text.to_string(),
        keywords,
        categories,
        summary,
        catchphrase,
        algo_type,
        created_at: Utc::now().to_rfc3339(),
    }
}
