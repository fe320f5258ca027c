use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Detection rules as data: one ordered phrase list per category.
///
/// Phrases must be lowercase; all matching is case-insensitive substring
/// containment against a lowercased text, with no token boundaries. A catalog
/// loaded from JSON may override any subset of categories; the rest keep the
/// built-in lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhraseCatalog {
    /// Phrases that mark a sentence as asserting a checkable fact.
    pub claim_indicators: Vec<String>,
    /// Words whose absence lowers claim confidence.
    pub attribution_markers: Vec<String>,
    /// Manipulation/conspiracy language that flags a claim as suspicious.
    pub suspicious_phrases: Vec<String>,
    /// Sales-pressure and scheme language scored against the whole transcript.
    pub scam_indicators: Vec<String>,
    pub emotional_words: Vec<String>,
    pub social_pressure_phrases: Vec<String>,
    pub fear_phrases: Vec<String>,
    pub urgency_phrases: Vec<String>,
    /// Vague-attribution phrases behind the `vague_language` red flag.
    pub vague_phrases: Vec<String>,
    /// Words whose absence anywhere in the transcript raises `no_sources_cited`.
    pub source_markers: Vec<String>,
}

impl Default for PhraseCatalog {
    fn default() -> Self {
        Self {
            claim_indicators: phrases(&[
                "studies show",
                "research proves",
                "data shows",
                "experts say",
                "doctors recommend",
                "scientists discovered",
                "proven fact",
                "statistics show",
                "according to",
                "it was found that",
            ]),
            attribution_markers: phrases(&["according", "study", "research", "reported"]),
            suspicious_phrases: phrases(&[
                "they dont want you to know",
                "secret",
                "hidden truth",
                "big pharma",
                "government conspiracy",
                "cover up",
                "shocking",
                "unbelievable",
                "this one trick",
            ]),
            scam_indicators: phrases(&[
                "buy now",
                "limited time",
                "act fast",
                "only today",
                "click here",
                "crypto",
                "guaranteed returns",
                "risk-free",
                "work from home",
                "make money fast",
                "payment required",
            ]),
            emotional_words: phrases(&[
                "shocking",
                "unbelievable",
                "horrific",
                "tragic",
                "devastating",
            ]),
            social_pressure_phrases: phrases(&["everyone knows", "most people", "trend"]),
            fear_phrases: phrases(&["danger", "warning", "alert", "threat"]),
            urgency_phrases: phrases(&["now", "today", "immediately", "limited"]),
            vague_phrases: phrases(&[
                "some people say",
                "they say",
                "doctors hate",
                "this one trick",
                "secret method",
            ]),
            source_markers: phrases(&["study", "research"]),
        }
    }
}

impl PhraseCatalog {
    /// Load a catalog from JSON, falling back to the built-in list for any
    /// category the document omits.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

fn phrases(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub(crate) fn contains_any(phrases: &[String], text_lower: &str) -> bool {
    phrases.iter().any(|p| text_lower.contains(p.as_str()))
}

pub(crate) fn count_present(phrases: &[String], text_lower: &str) -> usize {
    phrases.iter().filter(|p| text_lower.contains(p.as_str())).count()
}
