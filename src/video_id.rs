/// Video ID extraction for YouTube watch URLs
use regex::Regex;
use std::sync::LazyLock;

static WATCH_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://(?:www\.)?youtube\.com/watch\?v=([A-Za-z0-9_-]{11})")
        .expect("watch URL pattern is valid")
});

/// Extract the video identifier from a YouTube watch URL
///
/// Only `https://youtube.com/watch?v=<id>` and `https://www.youtube.com/watch?v=<id>`
/// are accepted, where `<id>` is 11 characters of letters, digits, `-` or `_`.
/// Anything after the identifier (extra query parameters, fragments) is ignored.
///
/// Examples:
/// - https://www.youtube.com/watch?v=dQw4w9WgXcQ → dQw4w9WgXcQ
/// - https://youtube.com/watch?v=dQw4w9WgXcQ&t=42s → dQw4w9WgXcQ
/// - https://youtu.be/dQw4w9WgXcQ → None
pub fn extract_video_id(url: &str) -> Option<String> {
    WATCH_URL
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|id| id.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_video_id_basic() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            extract_video_id("https://youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_extract_video_id_length() {
        let id = extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ").unwrap();
        assert_eq!(id.len(), 11);
    }

    #[test]
    fn test_extract_video_id_trailing_params() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=a_b-C1d2E3f&t=42s"),
            Some("a_b-C1d2E3f".to_string())
        );
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ#comments"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_extract_video_id_rejects_other_shapes() {
        assert_eq!(extract_video_id("http://www.youtube.com/watch?v=dQw4w9WgXcQ"), None);
        assert_eq!(extract_video_id("https://youtu.be/dQw4w9WgXcQ"), None);
        assert_eq!(extract_video_id("https://m.youtube.com/watch?v=dQw4w9WgXcQ"), None);
        assert_eq!(extract_video_id("https://www.youtube.com/watch?list=abc&v=dQw4w9WgXcQ"), None);
        assert_eq!(extract_video_id("https://www.google.com/search?q=rust"), None);
    }

    #[test]
    fn test_extract_video_id_edge_cases() {
        assert_eq!(extract_video_id(""), None);
        assert_eq!(extract_video_id("https://www.youtube.com/watch?v=short"), None);
        assert_eq!(extract_video_id("https://www.youtube.com/watch?v=bad!chars!!"), None);
        assert_eq!(extract_video_id("chrome://extensions"), None);
    }
}
