use std::sync::OnceLock;

use regex::Regex;

use crate::catalog::{PhraseCatalog, contains_any};
use crate::segment::split_sentences;
use crate::types::{Claim, ClaimStatus};

/// Detector output is capped to the first claims in source order.
pub const MAX_CLAIMS: usize = 10;

/// Inputs shorter than this are not worth segmenting.
const MIN_TEXT_CHARS: usize = 10;

/// A numeric token alone only marks a claim in a sentence longer than this
/// many words.
const MIN_CLAIM_WORDS: usize = 5;

const BASE_CONFIDENCE: i32 = 50;
const INDICATOR_BONUS: i32 = 20;
const NUMERIC_BONUS: i32 = 15;
const NO_ATTRIBUTION_PENALTY: i32 = 10;

static NUMERIC_TOKEN: OnceLock<Regex> = OnceLock::new();

fn numeric_token() -> &'static Regex {
    NUMERIC_TOKEN.get_or_init(|| Regex::new(r"\d+%?").expect("numeric token regex"))
}

/// Detect factual claims in transcript text.
#[derive(Debug, Clone, Default)]
pub struct ClaimDetector {
    catalog: PhraseCatalog,
}

impl ClaimDetector {
    pub fn new(catalog: PhraseCatalog) -> Self {
        Self { catalog }
    }

    /// Extract up to [`MAX_CLAIMS`] claims from `text`, in source order.
    pub fn detect_claims(&self, text: &str) -> Vec<Claim> {
        if text.chars().count() < MIN_TEXT_CHARS {
            return Vec::new();
        }

        split_sentences(text)
            .into_iter()
            .filter(|sentence| self.contains_claim(sentence))
            .take(MAX_CLAIMS)
            .map(|sentence| self.build_claim(sentence))
            .collect()
    }

    /// A sentence contains a claim when a claim-indicator phrase matches, or
    /// when it carries a numeric token and enough words to say something.
    fn contains_claim(&self, sentence: &str) -> bool {
        let lower = sentence.to_lowercase();
        if contains_any(&self.catalog.claim_indicators, &lower) {
            return true;
        }
        numeric_token().is_match(sentence)
            && sentence.split_whitespace().count() > MIN_CLAIM_WORDS
    }

    fn build_claim(&self, sentence: String) -> Claim {
        let lower = sentence.to_lowercase();
        Claim {
            confidence: self.confidence(&sentence, &lower),
            status: ClaimStatus::Unknown,
            is_suspicious: contains_any(&self.catalog.suspicious_phrases, &lower),
            keywords_found: self.keywords_found(&lower),
            text: sentence,
        }
    }

    fn confidence(&self, sentence: &str, lower: &str) -> u8 {
        let mut confidence = BASE_CONFIDENCE;
        if contains_any(&self.catalog.claim_indicators, lower) {
            confidence += INDICATOR_BONUS;
        }
        if numeric_token().is_match(sentence) {
            confidence += NUMERIC_BONUS;
        }
        if !contains_any(&self.catalog.attribution_markers, lower) {
            confidence -= NO_ATTRIBUTION_PENALTY;
        }
        confidence.clamp(0, 100) as u8
    }

    /// Every matched claim-indicator phrase, then every matched suspicious
    /// phrase, in catalog order.
    fn keywords_found(&self, lower: &str) -> Vec<String> {
        self.catalog
            .claim_indicators
            .iter()
            .chain(self.catalog.suspicious_phrases.iter())
            .filter(|phrase| lower.contains(phrase.as_str()))
            .cloned()
            .collect()
    }
}
