//! Proverka Core Library
//!
//! Core functionality for analyzing TikTok, Instagram, and YouTube video links
//! for claim credibility, scam signals, and deepfake risk.

pub mod catalog;
pub mod claims;
pub mod error;
pub mod format;
pub mod link;
pub mod pipeline;
pub mod report;
pub mod risk;
pub mod score;
pub mod segment;
pub mod transcript;
pub mod types;
pub mod verify;

// Re-export commonly used items at crate root
pub use catalog::PhraseCatalog;
pub use claims::{ClaimDetector, MAX_CLAIMS};
pub use error::{ProverkaError, Result};
pub use format::{format_bundle_readable, format_duration, format_risk_level};
pub use link::resolve_link;
pub use pipeline::{AnalysisSession, Analyzer};
pub use report::{ReportFormat, render, render_html, render_json, render_pdf};
pub use risk::{RiskAnalyzer, deepfake_level, scam_level};
pub use score::credibility_score;
pub use segment::split_sentences;
pub use transcript::{
    CaptionTranscripts, NoVisualTranscriber, TRANSCRIPT_UNAVAILABLE, TranscriptSource,
    VisualTranscriber, transcript_available,
};
pub use types::{
    AnalysisBundle, Claim, ClaimStatus, ManipulationTactic, Platform, RedFlag, RiskAnalysis,
    RiskLevel, VideoInfo,
};
pub use verify::{ClaimVerifier, NoopVerifier};
