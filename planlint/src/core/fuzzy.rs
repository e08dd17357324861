//! Typo suggestions via normalized string similarity.

use similar::TextDiff;

/// Minimum similarity for a suggestion to be offered.
pub const DEFAULT_THRESHOLD: f32 = 0.6;

/// Block-matching similarity of two strings, in `[0, 1]`.
pub fn similarity(a: &str, b: &str) -> f32 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    TextDiff::from_chars(a, b).ratio()
}

/// Return the single highest-scoring candidate with score `>= threshold`.
///
/// Ties keep the candidate seen first.
pub fn best_match<'a, I>(query: &str, candidates: I, threshold: f32) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<(&'a str, f32)> = None;
    for candidate in candidates {
        let score = similarity(query, candidate);
        if score < threshold {
            continue;
        }
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((candidate, score));
        }
    }
    best.map(|(name, _)| name)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOOLS: [&str; 3] = ["search_web", "summarize", "send_email"];

    #[test]
    fn suggests_tool_one_edit_away() {
        assert_eq!(
            best_match("search_webb", TOOLS, DEFAULT_THRESHOLD),
            Some("search_web")
        );
        assert_eq!(
            best_match("sumarize", TOOLS, DEFAULT_THRESHOLD),
            Some("summarize")
        );
    }

    #[test]
    fn no_suggestion_below_threshold() {
        assert_eq!(best_match("quantum_flux", TOOLS, DEFAULT_THRESHOLD), None);
        assert_eq!(best_match("", TOOLS, DEFAULT_THRESHOLD), None);
    }

    #[test]
    fn empty_candidates_yield_none() {
        assert_eq!(best_match("search", std::iter::empty(), DEFAULT_THRESHOLD), None);
    }

    #[test]
    fn identical_strings_score_one() {
        assert!((similarity("query", "query") - 1.0).abs() < f32::EPSILON);
    }
}
