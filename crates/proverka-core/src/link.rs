use std::sync::OnceLock;

use regex::Regex;

use crate::error::{ProverkaError, Result};
use crate::types::{Platform, VideoInfo};

static TIKTOK_VIDEO_PATH: OnceLock<Regex> = OnceLock::new();
static TIKTOK_SHORT_TAIL: OnceLock<Regex> = OnceLock::new();
static INSTAGRAM_POST: OnceLock<Regex> = OnceLock::new();
static YOUTUBE_WATCH: OnceLock<Regex> = OnceLock::new();
static YOUTUBE_SHORT: OnceLock<Regex> = OnceLock::new();

fn pattern(cell: &'static OnceLock<Regex>, re: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(re).expect("video id pattern"))
}

/// Resolve a video URL into platform metadata.
///
/// Platform detection is a substring match on domain fragments; id extraction
/// uses platform-specific patterns. Title, duration, and upload date are stub
/// defaults until a platform metadata API is wired in.
pub fn resolve_link(url: &str) -> Result<VideoInfo> {
    if url.trim().is_empty() {
        return Err(ProverkaError::EmptyLink);
    }

    let platform = identify_platform(url).ok_or_else(|| ProverkaError::UnsupportedPlatform {
        url: url.to_string(),
    })?;
    let video_id = extract_video_id(platform, url).ok_or_else(|| ProverkaError::VideoIdNotFound {
        url: url.to_string(),
    })?;

    Ok(VideoInfo {
        platform,
        url: url.to_string(),
        video_id,
        title: "Video Analysis".to_string(),
        duration: 0,
        upload_date: None,
    })
}

pub fn identify_platform(url: &str) -> Option<Platform> {
    let lower = url.to_lowercase();
    if lower.contains("tiktok.com") || lower.contains("vm.tiktok.com") {
        Some(Platform::Tiktok)
    } else if lower.contains("instagram.com") || lower.contains("instagr.am") {
        Some(Platform::Instagram)
    } else if lower.contains("youtube.com") || lower.contains("youtu.be") {
        Some(Platform::Youtube)
    } else {
        None
    }
}

fn extract_video_id(platform: Platform, url: &str) -> Option<String> {
    match platform {
        Platform::Tiktok => extract_tiktok_id(url),
        Platform::Instagram => extract_instagram_id(url),
        Platform::Youtube => extract_youtube_id(url),
    }
}

/// `tiktok.com/@user/video/<digits>`, or the trailing path segment on
/// `vm.tiktok.com` short links.
fn extract_tiktok_id(url: &str) -> Option<String> {
    if let Some(captures) = pattern(&TIKTOK_VIDEO_PATH, r"/video/(\d+)").captures(url) {
        return Some(captures[1].to_string());
    }
    pattern(&TIKTOK_SHORT_TAIL, r"/([a-zA-Z0-9]+)$")
        .captures(url)
        .map(|captures| captures[1].to_string())
}

/// `instagram.com/p/<id>` or `instagram.com/reel/<id>`.
fn extract_instagram_id(url: &str) -> Option<String> {
    pattern(&INSTAGRAM_POST, r"/(p|reel)/([a-zA-Z0-9_-]+)")
        .captures(url)
        .map(|captures| captures[2].to_string())
}

/// `watch?v=<11-char id>` or `youtu.be/<11-char id>`.
fn extract_youtube_id(url: &str) -> Option<String> {
    if let Some(captures) = pattern(&YOUTUBE_WATCH, r"v=([a-zA-Z0-9_-]{11})").captures(url) {
        return Some(captures[1].to_string());
    }
    pattern(&YOUTUBE_SHORT, r"youtu\.be/([a-zA-Z0-9_-]{11})")
        .captures(url)
        .map(|captures| captures[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn youtube_watch_id_is_exactly_eleven_chars() {
        let info = resolve_link("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=10s").unwrap();
        assert_eq!(info.platform, Platform::Youtube);
        assert_eq!(info.video_id, "dQw4w9WgXcQ");
    }

    #[test]
    fn youtube_short_link_resolves() {
        let info = resolve_link("https://youtu.be/dQw4w9WgXcQ").unwrap();
        assert_eq!(info.platform, Platform::Youtube);
        assert_eq!(info.video_id, "dQw4w9WgXcQ");
    }

    #[test]
    fn tiktok_video_path_takes_the_numeric_segment() {
        let info =
            resolve_link("https://www.tiktok.com/@someone/video/7234567890123456789").unwrap();
        assert_eq!(info.platform, Platform::Tiktok);
        assert_eq!(info.video_id, "7234567890123456789");
    }

    #[test]
    fn tiktok_short_link_takes_the_trailing_segment() {
        let info = resolve_link("https://vm.tiktok.com/ZMabc123").unwrap();
        assert_eq!(info.video_id, "ZMabc123");
    }

    #[test]
    fn instagram_reel_and_post_resolve() {
        let reel = resolve_link("https://www.instagram.com/reel/Cxy_z-123ab/").unwrap();
        assert_eq!(reel.platform, Platform::Instagram);
        assert_eq!(reel.video_id, "Cxy_z-123ab");

        let post = resolve_link("https://instagram.com/p/Babc123/").unwrap();
        assert_eq!(post.video_id, "Babc123");
    }

    #[test]
    fn stub_metadata_defaults_are_filled() {
        let info = resolve_link("https://youtu.be/dQw4w9WgXcQ").unwrap();
        assert_eq!(info.title, "Video Analysis");
        assert_eq!(info.duration, 0);
        assert!(info.upload_date.is_none());
    }

    #[test]
    fn empty_link_is_rejected() {
        assert!(matches!(resolve_link("   "), Err(ProverkaError::EmptyLink)));
    }

    #[test]
    fn unknown_domain_is_rejected() {
        assert!(matches!(
            resolve_link("https://example.com/watch?v=dQw4w9WgXcQ"),
            Err(ProverkaError::UnsupportedPlatform { .. })
        ));
    }

    #[test]
    fn recognized_platform_without_an_id_is_rejected() {
        assert!(matches!(
            resolve_link("https://www.tiktok.com/"),
            Err(ProverkaError::VideoIdNotFound { .. })
        ));
    }
}
