use tracing::{info, warn};

use crate::catalog::PhraseCatalog;
use crate::claims::ClaimDetector;
use crate::error::Result;
use crate::link::resolve_link;
use crate::risk::RiskAnalyzer;
use crate::transcript::{
    CaptionTranscripts, NoVisualTranscriber, TRANSCRIPT_UNAVAILABLE, TranscriptSource,
    VisualTranscriber,
};
use crate::types::{AnalysisBundle, Claim, RiskAnalysis, VideoInfo};
use crate::verify::{ClaimVerifier, NoopVerifier};

/// One configured analysis context: the detection rules plus the external
/// collaborators for transcript retrieval and claim verification. Each
/// [`Analyzer::analyze`] pass builds its own frozen [`AnalysisBundle`]; there
/// is no shared mutable state across runs.
pub struct Analyzer {
    detector: ClaimDetector,
    risk: RiskAnalyzer,
    transcripts: Box<dyn TranscriptSource>,
    visual: Box<dyn VisualTranscriber>,
    verifier: Box<dyn ClaimVerifier>,
}

impl Analyzer {
    pub fn new() -> Self {
        Self::with_catalog(PhraseCatalog::default())
    }

    pub fn with_catalog(catalog: PhraseCatalog) -> Self {
        Self {
            detector: ClaimDetector::new(catalog.clone()),
            risk: RiskAnalyzer::new(catalog),
            transcripts: Box::new(CaptionTranscripts::new()),
            visual: Box::new(NoVisualTranscriber),
            verifier: Box::new(NoopVerifier),
        }
    }

    pub fn with_transcript_source(mut self, source: Box<dyn TranscriptSource>) -> Self {
        self.transcripts = source;
        self
    }

    pub fn with_visual_transcriber(mut self, visual: Box<dyn VisualTranscriber>) -> Self {
        self.visual = visual;
        self
    }

    pub fn with_verifier(mut self, verifier: Box<dyn ClaimVerifier>) -> Self {
        self.verifier = verifier;
        self
    }

    /// Stage 1: validate the link and extract video metadata.
    pub fn resolve(&self, url: &str) -> Result<VideoInfo> {
        resolve_link(url)
    }

    /// Stage 2: obtain a transcript, degrading to the sentinel when none is
    /// available. Retrieval failure never aborts a run; it is the pipeline's
    /// only defined degraded-mode path.
    pub async fn fetch_transcript(&self, video_info: &VideoInfo) -> String {
        match self.transcripts.fetch(video_info).await {
            Ok(Some(text)) => return text,
            Ok(None) => {}
            Err(err) => warn!(%err, "transcript retrieval failed"),
        }

        match self.visual.transcribe(video_info) {
            Ok(Some(text)) => text,
            Ok(None) => TRANSCRIPT_UNAVAILABLE.to_string(),
            Err(err) => {
                warn!(%err, "visual transcription failed");
                TRANSCRIPT_UNAVAILABLE.to_string()
            }
        }
    }

    /// Stage 3: detect claims, then run the verifier pass over them.
    pub async fn detect_claims(&self, transcript: &str) -> Result<Vec<Claim>> {
        let mut claims = self.detector.detect_claims(transcript);
        self.verifier.verify(&mut claims).await?;
        Ok(claims)
    }

    /// Stage 4: score scam and deepfake risk.
    pub fn assess(
        &self,
        transcript: &str,
        claims: &[Claim],
        video_info: &VideoInfo,
    ) -> RiskAnalysis {
        self.risk.analyze(transcript, claims, video_info)
    }

    /// Run the full pipeline for one URL and freeze the result.
    pub async fn analyze(&self, url: &str) -> Result<AnalysisBundle> {
        let video_info = self.resolve(url)?;
        info!(
            platform = video_info.platform.name(),
            video_id = %video_info.video_id,
            "link resolved"
        );

        let transcript = self.fetch_transcript(&video_info).await;
        let claims = self.detect_claims(&transcript).await?;
        let risk_analysis = self.assess(&transcript, &claims, &video_info);
        info!(
            claims = claims.len(),
            scam = risk_analysis.scam_risk_score,
            deepfake = risk_analysis.deepfake_risk_score,
            "analysis complete"
        );

        Ok(AnalysisBundle::new(video_info, transcript, claims, risk_analysis))
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Holds the latest frozen bundle across interactions. A failed run leaves
/// the previous result in place; there is no other session state.
#[derive(Default)]
pub struct AnalysisSession {
    last: Option<AnalysisBundle>,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&AnalysisBundle> {
        self.last.as_ref()
    }

    pub fn record(&mut self, bundle: AnalysisBundle) -> &AnalysisBundle {
        self.last.insert(bundle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProverkaError;
    use crate::types::{ClaimStatus, Platform, RiskLevel};
    use async_trait::async_trait;

    struct FixedTranscript(&'static str);

    #[async_trait]
    impl TranscriptSource for FixedTranscript {
        async fn fetch(&self, _video_info: &VideoInfo) -> Result<Option<String>> {
            Ok(Some(self.0.to_string()))
        }
    }

    struct FailingTranscript;

    #[async_trait]
    impl TranscriptSource for FailingTranscript {
        async fn fetch(&self, _video_info: &VideoInfo) -> Result<Option<String>> {
            Err(ProverkaError::ReportFailed {
                reason: "socket closed".to_string(),
            })
        }
    }

    struct DebunkEverything;

    #[async_trait]
    impl ClaimVerifier for DebunkEverything {
        async fn verify(&self, claims: &mut [Claim]) -> Result<()> {
            for claim in claims {
                claim.status = ClaimStatus::False;
            }
            Ok(())
        }
    }

    const PITCH: &str = "Studies show that 90% of people agree with this shocking and \
        unbelievable secret method. Buy now because everyone knows the offer is limited.";

    #[tokio::test]
    async fn full_pass_produces_a_frozen_bundle() {
        let analyzer =
            Analyzer::new().with_transcript_source(Box::new(FixedTranscript(PITCH)));
        let bundle = analyzer
            .analyze("https://www.tiktok.com/@user/video/7234567890123456789")
            .await
            .unwrap();

        assert_eq!(bundle.video_info.platform, Platform::Tiktok);
        assert_eq!(bundle.claims.len(), 1);
        assert!(bundle.claims[0].is_suspicious);
        // Short stub duration plus TikTok platform bump.
        assert_eq!(bundle.risk_analysis.deepfake_risk_level, RiskLevel::Medium);
        assert_eq!(bundle.url, "https://www.tiktok.com/@user/video/7234567890123456789");
    }

    #[tokio::test]
    async fn retrieval_failure_degrades_to_the_sentinel() {
        let analyzer = Analyzer::new().with_transcript_source(Box::new(FailingTranscript));
        let bundle = analyzer
            .analyze("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
            .await
            .unwrap();

        assert_eq!(bundle.transcript, TRANSCRIPT_UNAVAILABLE);
        assert!(bundle.claims.is_empty());
        // The sentinel text itself must not trip phrase scoring into claims.
        assert_eq!(bundle.risk_analysis.scam_risk_score, 10);
    }

    #[tokio::test]
    async fn identical_inputs_yield_identical_scores() {
        let analyzer =
            Analyzer::new().with_transcript_source(Box::new(FixedTranscript(PITCH)));
        let url = "https://www.tiktok.com/@user/video/7234567890123456789";

        let first = analyzer.analyze(url).await.unwrap();
        let second = analyzer.analyze(url).await.unwrap();
        assert_eq!(first.risk_analysis, second.risk_analysis);
        assert_eq!(first.credibility_score, second.credibility_score);
        assert_eq!(first.claims, second.claims);
    }

    #[tokio::test]
    async fn verifier_outcome_flows_into_the_score() {
        let analyzer = Analyzer::new()
            .with_transcript_source(Box::new(FixedTranscript(PITCH)))
            .with_verifier(Box::new(DebunkEverything));
        let bundle = analyzer
            .analyze("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
            .await
            .unwrap();

        assert!(bundle.claims.iter().all(|c| c.status == ClaimStatus::False));
        let unpenalized = crate::score::credibility_score(
            &bundle.risk_analysis,
            &[],
        );
        assert_eq!(
            bundle.credibility_score,
            unpenalized.saturating_sub(10 * bundle.claims.len() as u8)
        );
    }

    #[tokio::test]
    async fn session_keeps_previous_result_across_a_failed_run() {
        let analyzer =
            Analyzer::new().with_transcript_source(Box::new(FixedTranscript(PITCH)));
        let mut session = AnalysisSession::new();
        assert!(session.last().is_none());

        let bundle = analyzer
            .analyze("https://youtu.be/dQw4w9WgXcQ")
            .await
            .unwrap();
        session.record(bundle);

        let failed = analyzer.analyze("https://example.com/clip").await;
        assert!(failed.is_err());
        assert_eq!(
            session.last().unwrap().video_info.video_id,
            "dQw4w9WgXcQ"
        );
    }
}
