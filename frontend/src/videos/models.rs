use crate::api_client::Validate;
use crate::utils::parse_timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use url::Url;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VideoRecord {
    pub id: i64,
    pub video_id: String,
    pub title: String,
    pub channel_name: String,
    pub thumbnail_url: Option<String>,
    pub description: Option<String>,
    pub published_at: Option<String>,
    pub video_url: Option<String>,
    pub view_count: Option<u64>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl VideoRecord {
    pub fn published_timestamp(&self) -> Option<DateTime<Utc>> {
        self.published_at.as_deref().and_then(parse_timestamp)
    }

    pub fn watch_id(&self) -> Option<String> {
        self.video_url.as_deref().and_then(watch_video_id)
    }

    /// Developer diagnostics for links that point at the wrong or a fake video.
    pub fn link_warnings(&self) -> Vec<String> {
        let Some(video_url) = self.video_url.as_deref() else {
            return vec![format!("missing video_url for \"{}\"", self.title)];
        };
        let Some(watch_id) = watch_video_id(video_url) else {
            return vec![format!("invalid watch link for \"{}\": {}", self.title, video_url)];
        };

        let mut warnings = Vec::new();
        if let Some(thumbnail) = &self.thumbnail_url {
            if !thumbnail.contains(&watch_id) {
                warnings.push(format!(
                    "thumbnail of \"{}\" does not match video {} (thumbnail: {}, expected https://i.ytimg.com/vi/{}/maxresdefault.jpg)",
                    self.title, watch_id, thumbnail, watch_id
                ));
            }
        }
        if watch_id.contains("EXAMPLE") || watch_id.contains("PLACEHOLDER") {
            warnings.push(format!(
                "placeholder video id {} for \"{}\"",
                watch_id, self.title
            ));
        }
        warnings
    }
}

/// A fetched page of videos; ids must be unique and links must be watch links.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(transparent)]
pub struct VideoBatch(pub Vec<VideoRecord>);

impl Validate for VideoBatch {
    fn validate(&self) -> Result<(), String> {
        let mut seen = HashSet::new();
        for video in &self.0 {
            if !seen.insert(video.id) {
                return Err(format!("duplicate video id {}", video.id));
            }
            if let Some(video_url) = &video.video_url {
                if watch_video_id(video_url).is_none() {
                    return Err(format!("video {} has no watch link: {}", video.id, video_url));
                }
            }
        }
        Ok(())
    }
}

/// Extracts the video id from a `youtube.com/watch?v=` or `youtu.be/` link.
pub fn watch_video_id(link: &str) -> Option<String> {
    let url = Url::parse(link).ok()?;
    let host = url.host_str()?;

    let candidate = match host {
        "youtube.com" | "www.youtube.com" | "m.youtube.com" if url.path() == "/watch" => url
            .query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| value.into_owned())?,
        "youtu.be" => url.path_segments()?.next()?.to_string(),
        _ => return None,
    };

    let valid = !candidate.is_empty()
        && candidate
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    valid.then_some(candidate)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelAggregate {
    pub channel_name: String,
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_client::{decode, ApiError};

    fn record(id: i64, video_url: Option<&str>, thumbnail_url: Option<&str>) -> VideoRecord {
        VideoRecord {
            id,
            video_id: format!("v{id}"),
            title: format!("Battle {id}"),
            channel_name: "PvP Lab".to_string(),
            thumbnail_url: thumbnail_url.map(str::to_string),
            description: None,
            published_at: None,
            video_url: video_url.map(str::to_string),
            view_count: None,
            tags: Vec::new(),
        }
    }

    #[test]
    fn extracts_id_from_watch_links() {
        assert_eq!(
            watch_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            watch_video_id("https://youtube.com/watch?feature=share&v=abc_DEF-123"),
            Some("abc_DEF-123".to_string())
        );
        assert_eq!(
            watch_video_id("https://youtu.be/abc123"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn rejects_non_watch_links() {
        assert_eq!(watch_video_id("https://www.youtube.com/channel/UC123"), None);
        assert_eq!(watch_video_id("https://vimeo.com/watch?v=abc"), None);
        assert_eq!(watch_video_id("https://www.youtube.com/watch?v=bad%20id"), None);
        assert_eq!(watch_video_id("not a url"), None);
    }

    #[test]
    fn batch_decodes_backend_payload() {
        let body = r#"[{
            "id": 1, "video_id": "abc123", "title": "GBL run", "channel_name": "PvP Lab",
            "thumbnail_url": "https://i.ytimg.com/vi/abc123/maxresdefault.jpg",
            "description": null, "published_at": "2024-05-01T12:00:00",
            "video_url": "https://www.youtube.com/watch?v=abc123", "view_count": 1200
        }]"#;
        let batch: VideoBatch = decode(body).unwrap();
        assert_eq!(batch.0.len(), 1);
        assert!(batch.0[0].tags.is_empty());
        assert!(batch.0[0].published_timestamp().is_some());
    }

    #[test]
    fn batch_with_duplicate_ids_is_malformed() {
        let batch = VideoBatch(vec![record(1, None, None), record(1, None, None)]);
        assert!(batch.validate().is_err());
    }

    #[test]
    fn batch_with_bad_link_fails_closed() {
        let body = r#"[{"id": 1, "video_id": "x", "title": "t", "channel_name": "c",
            "thumbnail_url": null, "description": null, "published_at": null,
            "video_url": "https://example.com/video", "view_count": null}]"#;
        let result: Result<VideoBatch, _> = decode(body);
        assert!(matches!(result, Err(ApiError::Malformed(_))));
    }

    #[test]
    fn negative_view_count_fails_closed() {
        let body = r#"[{"id": 1, "video_id": "abc123", "title": "t", "channel_name": "c",
            "thumbnail_url": null, "description": null, "published_at": null,
            "video_url": "https://youtu.be/abc123", "view_count": -5}]"#;
        let result: Result<VideoBatch, _> = decode(body);
        assert!(matches!(result, Err(ApiError::Malformed(_))));
    }

    #[test]
    fn link_warnings_flag_mismatched_thumbnail_and_placeholders() {
        let ok = record(
            1,
            Some("https://youtu.be/abc123"),
            Some("https://i.ytimg.com/vi/abc123/hqdefault.jpg"),
        );
        assert!(ok.link_warnings().is_empty());

        let mismatched = record(
            2,
            Some("https://youtu.be/abc123"),
            Some("https://i.ytimg.com/vi/zzz999/hqdefault.jpg"),
        );
        assert_eq!(mismatched.link_warnings().len(), 1);

        let placeholder = record(3, Some("https://youtu.be/EXAMPLE_VIDEO_ID"), None);
        assert_eq!(placeholder.link_warnings().len(), 1);

        assert_eq!(record(4, None, None).link_warnings().len(), 1);
    }
}
