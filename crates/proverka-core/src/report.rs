use chrono::Utc;
use serde::Serialize;

use crate::error::Result;
use crate::transcript::transcript_available;
use crate::types::{AnalysisBundle, Claim};

pub const TOOL_NAME: &str = "proverka";
pub const REPORT_VERSION: &str = "1.0";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Json,
    Html,
    Pdf,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Json => "json",
            ReportFormat::Html => "html",
            ReportFormat::Pdf => "pdf",
        }
    }
}

#[derive(Serialize)]
struct ReportMetadata {
    timestamp: String,
    tool: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
struct ReportEnvelope<'a> {
    metadata: ReportMetadata,
    analysis: &'a AnalysisBundle,
}

pub fn render(bundle: &AnalysisBundle, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Json => render_json(bundle),
        ReportFormat::Html => Ok(render_html(bundle)),
        ReportFormat::Pdf => Ok(render_pdf(bundle)),
    }
}

/// Structured export: metadata envelope plus the full bundle, indented for
/// readability.
pub fn render_json(bundle: &AnalysisBundle) -> Result<String> {
    let envelope = ReportEnvelope {
        metadata: ReportMetadata {
            timestamp: Utc::now().to_rfc3339(),
            tool: TOOL_NAME,
            version: REPORT_VERSION,
        },
        analysis: bundle,
    };
    Ok(serde_json::to_string_pretty(&envelope)?)
}

/// Self-contained styled document: score card, risk cards, claim list, and
/// source link, with placeholder text for anything missing.
pub fn render_html(bundle: &AnalysisBundle) -> String {
    let title = if bundle.video_info.title.trim().is_empty() {
        "Unknown"
    } else {
        bundle.video_info.title.as_str()
    };

    let scam = bundle.risk_analysis.scam_risk_level;
    let deepfake = bundle.risk_analysis.deepfake_risk_level;

    let transcript_section = if transcript_available(&bundle.transcript) {
        format!("<p>{}</p>", escape_html(&bundle.transcript))
    } else {
        "<p><em>Transcript was not available for this video. Scores are based on \
         link metadata and platform signals only.</em></p>"
            .to_string()
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="UTF-8">
<title>Video Credibility Report</title>
<style>
    body {{ font-family: Arial, sans-serif; margin: 20px; background-color: #f5f5f5; }}
    .container {{ max-width: 900px; margin: 0 auto; background-color: white; padding: 30px; border-radius: 8px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); }}
    h1 {{ color: #333; border-bottom: 3px solid #0066cc; padding-bottom: 10px; }}
    h2 {{ color: #0066cc; margin-top: 30px; }}
    .score-card {{ background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; padding: 20px; border-radius: 8px; text-align: center; font-size: 48px; font-weight: bold; margin: 20px 0; }}
    .risk-section {{ display: flex; gap: 20px; margin: 20px 0; }}
    .risk-card {{ flex: 1; padding: 15px; border-radius: 8px; text-align: center; }}
    .risk-low {{ background-color: #d4edda; color: #155724; }}
    .risk-medium {{ background-color: #fff3cd; color: #856404; }}
    .risk-high {{ background-color: #f8d7da; color: #721c24; }}
    .tag-list {{ list-style: none; padding: 0; }}
    .tag-list li {{ display: inline-block; background-color: #eef2f7; padding: 4px 10px; margin: 3px; border-radius: 12px; font-size: 14px; }}
    .claim {{ background-color: #f8f9fa; padding: 12px; margin: 10px 0; border-left: 4px solid #0066cc; border-radius: 4px; }}
    .timestamp {{ color: #666; font-size: 12px; text-align: right; margin-top: 20px; padding-top: 20px; border-top: 1px solid #ddd; }}
</style>
</head>
<body>
<div class="container">
    <h1>Video Credibility Report</h1>

    <div class="score-card">{score}/100</div>

    <h2>Risk Assessment</h2>
    <div class="risk-section">
        <div class="risk-card risk-{scam_class}">
            <strong>Scam Risk</strong><br>
            {scam_label} ({scam_score}/100)
        </div>
        <div class="risk-card risk-{deepfake_class}">
            <strong>Deepfake Risk</strong><br>
            {deepfake_label} ({deepfake_score}/100)
        </div>
    </div>
    {signals}

    <h2>Detected Claims</h2>
    {claims}

    <h2>Transcript</h2>
    {transcript}

    <h2>Video Information</h2>
    <p><strong>Title:</strong> {title}</p>
    <p><strong>Platform:</strong> {platform}</p>
    <p><strong>URL:</strong> <a href="{url}">{url}</a></p>

    <div class="timestamp">Generated: {generated}</div>
</div>
</body>
</html>
"#,
        score = bundle.credibility_score,
        scam_class = scam.as_str(),
        scam_label = scam.as_str().to_uppercase(),
        scam_score = bundle.risk_analysis.scam_risk_score,
        deepfake_class = deepfake.as_str(),
        deepfake_label = deepfake.as_str().to_uppercase(),
        deepfake_score = bundle.risk_analysis.deepfake_risk_score,
        signals = signals_to_html(bundle),
        claims = claims_to_html(&bundle.claims),
        transcript = transcript_section,
        title = escape_html(title),
        platform = bundle.video_info.platform.name(),
        url = escape_html(&bundle.url),
        generated = Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
    )
}

/// Portable fixed-layout export is an acknowledged placeholder.
pub fn render_pdf(_bundle: &AnalysisBundle) -> String {
    "PDF report generation is not yet available".to_string()
}

fn signals_to_html(bundle: &AnalysisBundle) -> String {
    let tactics = &bundle.risk_analysis.manipulation_indicators;
    let flags = &bundle.risk_analysis.red_flags;
    if tactics.is_empty() && flags.is_empty() {
        return String::new();
    }

    let mut html = String::from("<ul class=\"tag-list\">\n");
    for tactic in tactics {
        html.push_str(&format!("        <li>{}</li>\n", tactic.as_str()));
    }
    for flag in flags {
        html.push_str(&format!("        <li>{}</li>\n", flag.as_str()));
    }
    html.push_str("    </ul>");
    html
}

fn claims_to_html(claims: &[Claim]) -> String {
    if claims.is_empty() {
        return "<p>No significant claims detected.</p>".to_string();
    }

    let mut html = String::new();
    for claim in claims {
        let text = if claim.text.trim().is_empty() {
            "N/A".to_string()
        } else {
            escape_html(&claim.text)
        };
        html.push_str(&format!(
            "<div class=\"claim\">\n\
             <p><strong>Claim:</strong> {}</p>\n\
             <p><strong>Status:</strong> {}</p>\n\
             <p><strong>Confidence:</strong> {}%</p>\n\
             </div>\n",
            text,
            claim.status.as_str().to_uppercase(),
            claim.confidence
        ));
    }
    html
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
