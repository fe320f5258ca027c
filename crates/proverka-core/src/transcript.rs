use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::error::Result;
use crate::types::{Platform, VideoInfo};

/// Sentinel stored in the bundle when no transcript could be obtained.
pub const TRANSCRIPT_UNAVAILABLE: &str = "[No transcript available]";

/// True when the bundle carries real transcript text rather than the sentinel.
pub fn transcript_available(transcript: &str) -> bool {
    transcript != TRANSCRIPT_UNAVAILABLE
}

/// Caption retrieval collaborator.
///
/// `Ok(None)` means the platform has no transcript for this video; errors are
/// treated as unavailable by the orchestration layer and never abort a run.
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    async fn fetch(&self, video_info: &VideoInfo) -> Result<Option<String>>;
}

/// Extension point for OCR and speech-to-text over the video itself.
/// No implementation ships yet; [`NoVisualTranscriber`] is the default.
pub trait VisualTranscriber: Send + Sync {
    fn transcribe(&self, video_info: &VideoInfo) -> Result<Option<String>>;
}

/// Visual transcription is not wired in.
pub struct NoVisualTranscriber;

impl VisualTranscriber for NoVisualTranscriber {
    fn transcribe(&self, _video_info: &VideoInfo) -> Result<Option<String>> {
        Ok(None)
    }
}

/// Caption-track retrieval backed by the platform's public watch page.
///
/// YouTube embeds its caption track list in the player response on the watch
/// page; a human-authored track is preferred over an auto-generated ("asr")
/// one, and caption segments are joined with single spaces. TikTok and
/// Instagram publish no caption data, so they always report unavailable until
/// a [`VisualTranscriber`] exists.
pub struct CaptionTranscripts {
    client: reqwest::Client,
}

impl CaptionTranscripts {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    async fn fetch_youtube(&self, video_id: &str) -> Result<Option<String>> {
        let watch_url = format!("https://www.youtube.com/watch?v={video_id}");
        let page = self.client.get(&watch_url).send().await?.text().await?;

        let tracks = caption_tracks(&page);
        let Some(track) = pick_track(&tracks) else {
            debug!(video_id, "no caption tracks published for video");
            return Ok(None);
        };
        debug!(
            video_id,
            language = %track.language_code,
            auto_generated = track.is_auto_generated(),
            "caption track selected"
        );

        let track_url = format!("{}&fmt=json3", track.base_url);
        let payload: CaptionPayload = self.client.get(&track_url).send().await?.json().await?;
        Ok(join_caption_events(&payload))
    }
}

impl Default for CaptionTranscripts {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TranscriptSource for CaptionTranscripts {
    async fn fetch(&self, video_info: &VideoInfo) -> Result<Option<String>> {
        match video_info.platform {
            Platform::Youtube => self.fetch_youtube(&video_info.video_id).await,
            // No public caption API; text overlays and audio would need the
            // video itself (OCR / speech-to-text).
            Platform::Tiktok | Platform::Instagram => Ok(None),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CaptionTrack {
    base_url: String,
    /// "asr" marks an auto-generated track.
    #[serde(default)]
    kind: Option<String>,
    #[serde(default)]
    language_code: String,
}

impl CaptionTrack {
    fn is_auto_generated(&self) -> bool {
        self.kind.as_deref() == Some("asr")
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlayerResponse {
    #[serde(default)]
    captions: Option<Captions>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Captions {
    #[serde(default)]
    player_captions_tracklist_renderer: Option<TracklistRenderer>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TracklistRenderer {
    #[serde(default)]
    caption_tracks: Vec<CaptionTrack>,
}

const PLAYER_RESPONSE_MARKER: &str = "ytInitialPlayerResponse = ";

/// Pull the caption track list out of the embedded player response. The JSON
/// object ends before trailing script text, so a streaming deserialize that
/// stops at the first complete value is enough.
fn caption_tracks(page: &str) -> Vec<CaptionTrack> {
    let Some(start) = page.find(PLAYER_RESPONSE_MARKER) else {
        return Vec::new();
    };
    let json = &page[start + PLAYER_RESPONSE_MARKER.len()..];
    let mut deserializer = serde_json::Deserializer::from_str(json);
    let Ok(response) = PlayerResponse::deserialize(&mut deserializer) else {
        return Vec::new();
    };
    response
        .captions
        .and_then(|c| c.player_captions_tracklist_renderer)
        .map(|r| r.caption_tracks)
        .unwrap_or_default()
}

/// Prefer a human-authored track over an auto-generated one.
fn pick_track(tracks: &[CaptionTrack]) -> Option<&CaptionTrack> {
    tracks
        .iter()
        .find(|t| !t.is_auto_generated())
        .or_else(|| tracks.first())
}

#[derive(Debug, Deserialize)]
struct CaptionPayload {
    #[serde(default)]
    events: Vec<CaptionEvent>,
}

#[derive(Debug, Deserialize)]
struct CaptionEvent {
    #[serde(default)]
    segs: Vec<CaptionSeg>,
}

#[derive(Debug, Deserialize)]
struct CaptionSeg {
    #[serde(default)]
    utf8: String,
}

/// Concatenate caption segments with single-space joins, collapsing the
/// newlines the caption format embeds.
fn join_caption_events(payload: &CaptionPayload) -> Option<String> {
    let mut lines = Vec::new();
    for event in &payload.events {
        let raw: String = event.segs.iter().map(|s| s.utf8.as_str()).collect();
        let line = raw.split_whitespace().collect::<Vec<_>>().join(" ");
        if !line.is_empty() {
            lines.push(line);
        }
    }
    if lines.is_empty() { None } else { Some(lines.join(" ")) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_with_tracks(tracks_json: &str) -> String {
        format!(
            "<script>var ytInitialPlayerResponse = {{\"captions\":{{\"playerCaptionsTracklistRenderer\":{{\"captionTracks\":{tracks_json}}}}}}};var meta = 1;</script>"
        )
    }

    #[test]
    fn human_authored_track_is_preferred_over_asr() {
        let page = page_with_tracks(
            r#"[{"baseUrl":"https://a.invalid/auto","kind":"asr","languageCode":"en"},
                {"baseUrl":"https://a.invalid/manual","languageCode":"en"}]"#,
        );
        let tracks = caption_tracks(&page);
        assert_eq!(tracks.len(), 2);
        let picked = pick_track(&tracks).unwrap();
        assert_eq!(picked.base_url, "https://a.invalid/manual");
        assert!(!picked.is_auto_generated());
    }

    #[test]
    fn asr_track_is_the_fallback() {
        let page = page_with_tracks(
            r#"[{"baseUrl":"https://a.invalid/auto","kind":"asr","languageCode":"en"}]"#,
        );
        let tracks = caption_tracks(&page);
        let picked = pick_track(&tracks).unwrap();
        assert!(picked.is_auto_generated());
    }

    #[test]
    fn page_without_player_response_has_no_tracks() {
        assert!(caption_tracks("<html>nothing here</html>").is_empty());
        assert!(pick_track(&[]).is_none());
    }

    #[test]
    fn caption_events_join_with_single_spaces() {
        let payload: CaptionPayload = serde_json::from_str(
            r#"{"events":[
                {"segs":[{"utf8":"first"},{"utf8":" line\n"}]},
                {"segs":[]},
                {"segs":[{"utf8":"second line"}]}
            ]}"#,
        )
        .unwrap();
        assert_eq!(
            join_caption_events(&payload).unwrap(),
            "first line second line"
        );
    }

    #[test]
    fn empty_caption_payload_is_unavailable() {
        let payload: CaptionPayload = serde_json::from_str(r#"{"events":[]}"#).unwrap();
        assert!(join_caption_events(&payload).is_none());
    }

    #[test]
    fn sentinel_is_not_a_transcript() {
        assert!(!transcript_available(TRANSCRIPT_UNAVAILABLE));
        assert!(transcript_available("real words"));
    }
}
