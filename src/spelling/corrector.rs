//! Whole-query correction against a curated candidate list.

use crate::spelling::levenshtein::fuzzy_ratio;

/// Default score a candidate must reach before it replaces the query.
pub const DEFAULT_SCORE_THRESHOLD: f32 = 80.0;

/// The candidate a matcher picked for a query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FuzzyMatch {
    /// Index of the candidate in the candidate list.
    pub index: usize,
    /// Similarity score on a 0 to 100 scale.
    pub score: f32,
}

/// Strategy for picking the candidate closest to a query.
pub trait FuzzyMatcher: Send + Sync {
    /// Find the best-scoring candidate, or `None` when the list is
    /// empty. Ties go to the earlier candidate.
    fn best_match(&self, query: &str, candidates: &[String]) -> Option<FuzzyMatch>;

    /// Get the name of this matcher.
    fn name(&self) -> &'static str;
}

/// The default matcher, scoring with the indel-based fuzzy ratio.
#[derive(Clone, Copy, Debug, Default)]
pub struct RatioMatcher;

impl RatioMatcher {
    /// Create a new ratio matcher.
    pub fn new() -> Self {
        RatioMatcher
    }
}

impl FuzzyMatcher for RatioMatcher {
    fn best_match(&self, query: &str, candidates: &[String]) -> Option<FuzzyMatch> {
        let mut best: Option<FuzzyMatch> = None;

        for (index, candidate) in candidates.iter().enumerate() {
            let score = fuzzy_ratio(query, candidate);
            if best.is_none_or(|b| score > b.score) {
                best = Some(FuzzyMatch { index, score });
            }
        }

        best
    }

    fn name(&self) -> &'static str {
        "ratio"
    }
}

/// Corrects a raw query by substituting the whole string with its
/// closest candidate.
///
/// The candidate list is configuration, typically the domain terms a
/// corpus owner expects users to misspell. An empty list disables
/// correction and every query passes through lowercased but otherwise
/// untouched.
pub struct QueryCorrector {
    candidates: Vec<String>,
    threshold: f32,
    matcher: Box<dyn FuzzyMatcher>,
}

impl QueryCorrector {
    /// Create a corrector over the given candidates with the default
    /// matcher and threshold. Candidates are lowercased so matching and
    /// substitution agree with the analysis pipeline.
    pub fn new<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        QueryCorrector {
            candidates: candidates
                .into_iter()
                .map(|candidate| candidate.as_ref().to_lowercase())
                .collect(),
            threshold: DEFAULT_SCORE_THRESHOLD,
            matcher: Box::new(RatioMatcher::new()),
        }
    }

    /// Create a corrector with no candidates, which corrects nothing.
    pub fn disabled() -> Self {
        QueryCorrector::new(Vec::<String>::new())
    }

    /// Set the score threshold a candidate must reach.
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Replace the matching strategy.
    pub fn with_matcher(mut self, matcher: Box<dyn FuzzyMatcher>) -> Self {
        self.matcher = matcher;
        self
    }

    /// The candidate list, lowercased.
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// The score threshold.
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Correct a raw query.
    ///
    /// The query is lowercased, then replaced by the best candidate
    /// when its score reaches the threshold. Queries no candidate comes
    /// close to pass through unchanged, as does everything when the
    /// candidate list is empty.
    pub fn correct(&self, raw_query: &str) -> String {
        let query = raw_query.to_lowercase();

        if let Some(found) = self.matcher.best_match(&query, &self.candidates) {
            if found.score >= self.threshold {
                return self.candidates[found.index].clone();
            }
        }

        query
    }
}

impl std::fmt::Debug for QueryCorrector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryCorrector")
            .field("candidates", &self.candidates.len())
            .field("threshold", &self.threshold)
            .field("matcher", &self.matcher.name())
            .finish()
    }
}
