use crate::catalog::{PhraseCatalog, contains_any, count_present};
use crate::types::{
    Claim, ClaimStatus, ManipulationTactic, Platform, RedFlag, RiskAnalysis, RiskLevel, VideoInfo,
};

const SCAM_BASE: i32 = 10;
const SCAM_PER_INDICATOR: i32 = 8;
const SCAM_PER_UNVERIFIED: i32 = 5;
const SCAM_PER_SUSPICIOUS: i32 = 10;

const DEEPFAKE_BASE: i32 = 15;
const DEEPFAKE_TIKTOK_BONUS: i32 = 10;
const DEEPFAKE_INSTAGRAM_BONUS: i32 = 5;
const DEEPFAKE_SHORT_BONUS: i32 = 5;

/// Videos under this many seconds get the short-runtime deepfake bump.
const SHORT_VIDEO_SECS: u32 = 15;

/// Map a scam score to its coarse level.
pub fn scam_level(score: u8) -> RiskLevel {
    if score < 30 {
        RiskLevel::Low
    } else if score < 70 {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}

/// Map a deepfake score to its coarse level.
pub fn deepfake_level(score: u8) -> RiskLevel {
    if score < 25 {
        RiskLevel::Low
    } else if score < 60 {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}

/// Score scam and deepfake risk for one transcript + metadata snapshot.
#[derive(Debug, Clone, Default)]
pub struct RiskAnalyzer {
    catalog: PhraseCatalog,
}

impl RiskAnalyzer {
    pub fn new(catalog: PhraseCatalog) -> Self {
        Self { catalog }
    }

    pub fn analyze(
        &self,
        transcript: &str,
        claims: &[Claim],
        video_info: &VideoInfo,
    ) -> RiskAnalysis {
        let transcript_lower = transcript.to_lowercase();
        let scam_risk_score = self.scam_score(&transcript_lower, claims);
        let deepfake_risk_score = self.deepfake_score(video_info);

        RiskAnalysis {
            scam_risk_level: scam_level(scam_risk_score),
            scam_risk_score,
            deepfake_risk_level: deepfake_level(deepfake_risk_score),
            deepfake_risk_score,
            manipulation_indicators: self.manipulation_indicators(&transcript_lower),
            red_flags: self.red_flags(&transcript_lower, claims),
        }
    }

    /// Scam indicators count once per phrase type present, not per occurrence.
    fn scam_score(&self, transcript_lower: &str, claims: &[Claim]) -> u8 {
        let indicator_types = count_present(&self.catalog.scam_indicators, transcript_lower) as i32;
        let unverified = claims
            .iter()
            .filter(|c| c.status == ClaimStatus::Unknown)
            .count() as i32;
        let suspicious = claims.iter().filter(|c| c.is_suspicious).count() as i32;

        let score = SCAM_BASE
            + SCAM_PER_INDICATOR * indicator_types
            + SCAM_PER_UNVERIFIED * unverified
            + SCAM_PER_SUSPICIOUS * suspicious;
        score.clamp(0, 100) as u8
    }

    /// Metadata-only heuristic: platform editing culture plus very short
    /// runtime. Frame and audio inspection are future work, so the transcript
    /// plays no part here.
    fn deepfake_score(&self, video_info: &VideoInfo) -> u8 {
        let mut score = DEEPFAKE_BASE;
        score += match video_info.platform {
            Platform::Tiktok => DEEPFAKE_TIKTOK_BONUS,
            Platform::Instagram => DEEPFAKE_INSTAGRAM_BONUS,
            Platform::Youtube => 0,
        };
        if video_info.duration < SHORT_VIDEO_SECS {
            score += DEEPFAKE_SHORT_BONUS;
        }
        score.clamp(0, 100) as u8
    }

    /// One tag per phrase group that matches at least once.
    fn manipulation_indicators(&self, transcript_lower: &str) -> Vec<ManipulationTactic> {
        let groups: [(&[String], ManipulationTactic); 4] = [
            (
                &self.catalog.emotional_words,
                ManipulationTactic::EmotionalManipulation,
            ),
            (
                &self.catalog.social_pressure_phrases,
                ManipulationTactic::SocialPressure,
            ),
            (&self.catalog.fear_phrases, ManipulationTactic::FearMongering),
            (&self.catalog.urgency_phrases, ManipulationTactic::UrgencyTactic),
        ];

        groups
            .iter()
            .filter(|(phrases, _)| contains_any(phrases, transcript_lower))
            .map(|(_, tactic)| *tactic)
            .collect()
    }

    fn red_flags(&self, transcript_lower: &str, claims: &[Claim]) -> Vec<RedFlag> {
        let mut flags = Vec::new();

        if !contains_any(&self.catalog.source_markers, transcript_lower) {
            flags.push(RedFlag::NoSourcesCited);
        }
        if contains_any(&self.catalog.vague_phrases, transcript_lower) {
            flags.push(RedFlag::VagueLanguage);
        }

        let unverified = claims
            .iter()
            .filter(|c| c.status == ClaimStatus::Unknown)
            .count();
        if !claims.is_empty() && unverified == claims.len() {
            flags.push(RedFlag::AllUnverifiedClaims);
        }

        flags
    }
}
