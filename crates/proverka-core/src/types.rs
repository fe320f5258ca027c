use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Tiktok,
    Instagram,
    Youtube,
}

impl Platform {
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Tiktok => "TikTok",
            Platform::Instagram => "Instagram",
            Platform::Youtube => "YouTube",
        }
    }
}

/// Metadata for a resolved video link.
///
/// Title, duration, and upload date come from the platform's metadata API,
/// which is not wired in; the resolver fills stub defaults for now.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoInfo {
    pub platform: Platform,
    pub url: String,
    pub video_id: String,
    pub title: String,
    /// Duration in seconds.
    pub duration: u32,
    pub upload_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimStatus {
    Unknown,
    Verified,
    False,
}

impl ClaimStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Unknown => "unknown",
            ClaimStatus::Verified => "verified",
            ClaimStatus::False => "false",
        }
    }
}

/// One sentence flagged as asserting a checkable fact.
///
/// Immutable after detection; only a [`crate::verify::ClaimVerifier`] may
/// change `status` away from `Unknown`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    pub text: String,
    /// Confidence that this sentence is a factual claim, 0-100.
    pub confidence: u8,
    pub status: ClaimStatus,
    pub is_suspicious: bool,
    /// Matched claim-indicator and suspicious phrases, in catalog order.
    pub keywords_found: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManipulationTactic {
    EmotionalManipulation,
    SocialPressure,
    FearMongering,
    UrgencyTactic,
}

impl ManipulationTactic {
    pub fn as_str(&self) -> &'static str {
        match self {
            ManipulationTactic::EmotionalManipulation => "emotional_manipulation",
            ManipulationTactic::SocialPressure => "social_pressure",
            ManipulationTactic::FearMongering => "fear_mongering",
            ManipulationTactic::UrgencyTactic => "urgency_tactic",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedFlag {
    NoSourcesCited,
    VagueLanguage,
    AllUnverifiedClaims,
}

impl RedFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            RedFlag::NoSourcesCited => "no_sources_cited",
            RedFlag::VagueLanguage => "vague_language",
            RedFlag::AllUnverifiedClaims => "all_unverified_claims",
        }
    }
}

/// Scam and deepfake assessment for one transcript + metadata snapshot.
///
/// Levels are pure step functions of their paired scores; see
/// [`crate::risk::scam_level`] and [`crate::risk::deepfake_level`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAnalysis {
    pub scam_risk_level: RiskLevel,
    pub scam_risk_score: u8,
    pub deepfake_risk_level: RiskLevel,
    pub deepfake_risk_score: u8,
    pub manipulation_indicators: Vec<ManipulationTactic>,
    pub red_flags: Vec<RedFlag>,
}

/// The frozen aggregate of one complete pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisBundle {
    pub timestamp: DateTime<Utc>,
    pub video_info: VideoInfo,
    pub transcript: String,
    pub claims: Vec<Claim>,
    pub risk_analysis: RiskAnalysis,
    pub credibility_score: u8,
    pub url: String,
}

impl AnalysisBundle {
    /// Assemble the bundle bottom-up from the component outputs. The
    /// credibility score is derived here so a bundle can never carry a score
    /// inconsistent with its own risk analysis and claims.
    pub fn new(
        video_info: VideoInfo,
        transcript: String,
        claims: Vec<Claim>,
        risk_analysis: RiskAnalysis,
    ) -> Self {
        let credibility_score = crate::score::credibility_score(&risk_analysis, &claims);
        let url = video_info.url.clone();
        Self {
            timestamp: Utc::now(),
            video_info,
            transcript,
            claims,
            risk_analysis,
            credibility_score,
            url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_wire_tags_match_report_format() {
        assert_eq!(serde_json::to_string(&Platform::Tiktok).unwrap(), "\"tiktok\"");
        assert_eq!(serde_json::to_string(&ClaimStatus::False).unwrap(), "\"false\"");
        assert_eq!(serde_json::to_string(&RiskLevel::Medium).unwrap(), "\"medium\"");
        assert_eq!(
            serde_json::to_string(&ManipulationTactic::FearMongering).unwrap(),
            "\"fear_mongering\""
        );
        assert_eq!(
            serde_json::to_string(&RedFlag::NoSourcesCited).unwrap(),
            "\"no_sources_cited\""
        );
    }

    #[test]
    fn bundle_score_is_derived_from_components() {
        let video_info = VideoInfo {
            platform: Platform::Youtube,
            url: "https://youtu.be/dQw4w9WgXcQ".to_string(),
            video_id: "dQw4w9WgXcQ".to_string(),
            title: "Video Analysis".to_string(),
            duration: 0,
            upload_date: None,
        };
        let risk_analysis = RiskAnalysis {
            scam_risk_level: RiskLevel::Low,
            scam_risk_score: 10,
            deepfake_risk_level: RiskLevel::Low,
            deepfake_risk_score: 20,
            manipulation_indicators: vec![],
            red_flags: vec![],
        };
        let bundle = AnalysisBundle::new(video_info, "text".to_string(), vec![], risk_analysis);
        assert_eq!(bundle.credibility_score, 90);
        assert_eq!(bundle.url, "https://youtu.be/dQw4w9WgXcQ");
    }
}
