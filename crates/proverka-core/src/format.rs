use crate::transcript::transcript_available;
use crate::types::{AnalysisBundle, RiskLevel};

/// Format a duration in seconds as MM:SS.
pub fn format_duration(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Risk level with a coarse marker for terminal output.
pub fn format_risk_level(level: RiskLevel) -> String {
    match level {
        RiskLevel::Low => "🟢 Low Risk".to_string(),
        RiskLevel::Medium => "🟡 Medium Risk".to_string(),
        RiskLevel::High => "🔴 High Risk".to_string(),
    }
}

/// Format an analysis bundle as human-readable markdown.
pub fn format_bundle_readable(bundle: &AnalysisBundle) -> String {
    let mut output = String::new();

    // Video info
    output.push_str("# Analysis Results\n\n");
    output.push_str(&format!(
        "**Platform:** {} | **Video ID:** {} | **Duration:** {}\n\n",
        bundle.video_info.platform.name(),
        bundle.video_info.video_id,
        format_duration(bundle.video_info.duration),
    ));

    // Credibility score
    output.push_str(&format!(
        "## Credibility Score: {}/100\n\n",
        bundle.credibility_score
    ));

    // Risk levels
    output.push_str(&format!(
        "**Scam:** {} ({}/100) | **Deepfake:** {} ({}/100)\n\n",
        format_risk_level(bundle.risk_analysis.scam_risk_level),
        bundle.risk_analysis.scam_risk_score,
        format_risk_level(bundle.risk_analysis.deepfake_risk_level),
        bundle.risk_analysis.deepfake_risk_score,
    ));

    // Transcript
    output.push_str("## Transcript\n\n");
    if transcript_available(&bundle.transcript) {
        output.push_str(&bundle.transcript);
        output.push_str("\n\n");
    } else {
        output.push_str(
            "Transcript not available for this video. Scores are based on link \
             metadata and platform signals only.\n\n",
        );
    }

    // Claims
    output.push_str("## Detected Claims\n\n");
    if bundle.claims.is_empty() {
        output.push_str("No significant claims detected.\n");
    } else {
        for (i, claim) in bundle.claims.iter().enumerate() {
            output.push_str(&format!(
                "{}. {} [{}] ({}% confidence)\n",
                i + 1,
                claim.text,
                claim.status.as_str().to_uppercase(),
                claim.confidence
            ));
            if !claim.keywords_found.is_empty() {
                output.push_str(&format!(
                    "   keywords: {}\n",
                    claim.keywords_found.join(", ")
                ));
            }
        }
    }
    output.push('\n');

    // Risk detail
    output.push_str("## Risk Signals\n\n");
    if bundle.risk_analysis.manipulation_indicators.is_empty() {
        output.push_str("No manipulation tactics detected.\n");
    } else {
        for tactic in &bundle.risk_analysis.manipulation_indicators {
            output.push_str(&format!("• tactic: {}\n", tactic.as_str()));
        }
    }
    if bundle.risk_analysis.red_flags.is_empty() {
        output.push_str("No red flags raised.\n");
    } else {
        for flag in &bundle.risk_analysis.red_flags {
            output.push_str(&format!("• red flag: {}\n", flag.as_str()));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::TRANSCRIPT_UNAVAILABLE;
    use crate::types::{Platform, RiskAnalysis, VideoInfo};

    #[test]
    fn duration_formats_as_minutes_and_seconds() {
        assert_eq!(format_duration(0), "00:00");
        assert_eq!(format_duration(75), "01:15");
        assert_eq!(format_duration(3599), "59:59");
    }

    #[test]
    fn readable_output_explains_a_missing_transcript() {
        let bundle = AnalysisBundle::new(
            VideoInfo {
                platform: Platform::Instagram,
                url: "https://instagram.com/reel/abc".to_string(),
                video_id: "abc".to_string(),
                title: "Video Analysis".to_string(),
                duration: 0,
                upload_date: None,
            },
            TRANSCRIPT_UNAVAILABLE.to_string(),
            vec![],
            RiskAnalysis {
                scam_risk_level: crate::types::RiskLevel::Low,
                scam_risk_score: 10,
                deepfake_risk_level: crate::types::RiskLevel::Low,
                deepfake_risk_score: 20,
                manipulation_indicators: vec![],
                red_flags: vec![],
            },
        );
        let readable = format_bundle_readable(&bundle);
        assert!(readable.contains("Transcript not available"));
        assert!(readable.contains("No significant claims detected."));
        assert!(readable.contains("Credibility Score: 90/100"));
    }
}
