use crate::types::{Claim, ClaimStatus, RiskAnalysis, RiskLevel};

const FALSE_CLAIM_PENALTY: i32 = 10;

fn scam_penalty(level: RiskLevel) -> i32 {
    match level {
        RiskLevel::Low => 5,
        RiskLevel::Medium => 20,
        RiskLevel::High => 40,
    }
}

fn deepfake_penalty(level: RiskLevel) -> i32 {
    match level {
        RiskLevel::Low => 5,
        RiskLevel::Medium => 15,
        RiskLevel::High => 35,
    }
}

/// Combine risk levels and claim verification status into a single 0-100
/// credibility score. Deterministic, no side effects.
pub fn credibility_score(risk_analysis: &RiskAnalysis, claims: &[Claim]) -> u8 {
    let false_claims = claims
        .iter()
        .filter(|c| c.status == ClaimStatus::False)
        .count() as i32;

    let score = 100
        - scam_penalty(risk_analysis.scam_risk_level)
        - deepfake_penalty(risk_analysis.deepfake_risk_level)
        - FALSE_CLAIM_PENALTY * false_claims;

    score.clamp(0, 100) as u8
}
