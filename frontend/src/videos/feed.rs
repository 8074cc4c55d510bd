use crate::api_client::ApiError;
use crate::request_sequence::{RequestSequence, RequestTicket};
use crate::videos::models::{ChannelAggregate, VideoRecord};
use std::collections::HashMap;

pub const VIDEO_PAGE_SIZE: u32 = 100;
pub const FEATURED_CHANNEL_LIMIT: usize = 8;
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load videos. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

impl SortOrder {
    pub fn display_name(&self) -> &'static str {
        match self {
            SortOrder::Newest => "Newest first",
            SortOrder::Oldest => "Oldest first",
        }
    }

    // Keys used in <option value="..."> so we can reliably map back and forth.
    pub fn key(&self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::Oldest => "oldest",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "newest" => Some(SortOrder::Newest),
            "oldest" => Some(SortOrder::Oldest),
            _ => None,
        }
    }

    pub fn all_variants() -> Vec<Self> {
        vec![SortOrder::Newest, SortOrder::Oldest]
    }
}

/// Counts videos per channel over the full set, most videos first. Channels
/// with equal counts keep the order in which they first appear in `videos`.
pub fn aggregate_channels(videos: &[VideoRecord]) -> Vec<ChannelAggregate> {
    let mut index_by_name: HashMap<&str, usize> = HashMap::new();
    let mut channels: Vec<ChannelAggregate> = Vec::new();

    for video in videos {
        match index_by_name.get(video.channel_name.as_str()) {
            Some(&index) => channels[index].count += 1,
            None => {
                index_by_name.insert(&video.channel_name, channels.len());
                channels.push(ChannelAggregate {
                    channel_name: video.channel_name.clone(),
                    count: 1,
                });
            }
        }
    }

    // sort_by is stable, so first-seen order breaks ties
    channels.sort_by(|a, b| b.count.cmp(&a.count));
    channels.truncate(FEATURED_CHANNEL_LIMIT);
    channels
}

/// Filters by exact channel name and orders by publish date.
///
/// Records without a parseable date count as the earliest possible date, so
/// they sit at the oldest end in both directions. `Newest` is the exact
/// reversal of `Oldest`, so records with equal dates come out in reverse input
/// order under `Newest`; a descending comparator would keep input order there.
pub fn visible_sequence(
    videos: &[VideoRecord],
    channel_filter: Option<&str>,
    order: SortOrder,
) -> Vec<VideoRecord> {
    let mut visible: Vec<VideoRecord> = videos
        .iter()
        .filter(|video| channel_filter.map_or(true, |channel| video.channel_name == channel))
        .cloned()
        .collect();

    visible.sort_by_key(|video| video.published_timestamp());
    if order == SortOrder::Newest {
        visible.reverse();
    }
    visible
}

/// What the gallery should show for the current state.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedView<'a> {
    Loading,
    /// Nothing loaded: the backend returned no videos or the load failed.
    NoVideos,
    /// Videos are loaded but none belong to the selected channel.
    NoMatches { channel: &'a str },
    Videos(&'a [VideoRecord]),
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct VideoFeed {
    videos: Vec<VideoRecord>,
    channels: Vec<ChannelAggregate>,
    selected_channel: Option<String>,
    sort_order: SortOrder,
    visible: Vec<VideoRecord>,
    loading: bool,
    error: Option<String>,
    requests: RequestSequence,
}

impl VideoFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_load(&mut self) -> RequestTicket {
        self.loading = true;
        self.requests.begin()
    }

    /// Commits a finished load. Returns `false` when a newer load superseded it.
    pub fn finish_load(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<Vec<VideoRecord>, ApiError>,
    ) -> bool {
        if !self.requests.accept(ticket, "video list") {
            return false;
        }
        self.loading = false;

        match outcome {
            Ok(videos) => {
                log::info!("Loaded {} videos", videos.len());
                self.videos = videos;
                self.channels = aggregate_channels(&self.videos);
                self.error = None;
                self.refresh_visible();
            }
            Err(e) => {
                log::error!("Failed to load videos: {}", e);
                self.error = Some(LOAD_ERROR_MESSAGE.to_string());
            }
        }
        true
    }

    /// Selecting the active channel again clears the filter.
    pub fn toggle_channel_filter(&mut self, channel_name: &str) {
        if self.selected_channel.as_deref() == Some(channel_name) {
            self.selected_channel = None;
        } else {
            self.selected_channel = Some(channel_name.to_string());
        }
        self.refresh_visible();
    }

    pub fn clear_channel_filter(&mut self) {
        self.selected_channel = None;
        self.refresh_visible();
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.sort_order = order;
        self.refresh_visible();
    }

    fn refresh_visible(&mut self) {
        self.visible = visible_sequence(
            &self.videos,
            self.selected_channel.as_deref(),
            self.sort_order,
        );
    }

    pub fn featured_channels(&self) -> &[ChannelAggregate] {
        &self.channels
    }

    pub fn selected_channel(&self) -> Option<&str> {
        self.selected_channel.as_deref()
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn visible(&self) -> &[VideoRecord] {
        &self.visible
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn view(&self) -> FeedView<'_> {
        if self.videos.is_empty() {
            return if self.loading {
                FeedView::Loading
            } else {
                FeedView::NoVideos
            };
        }
        match (self.visible.is_empty(), self.selected_channel.as_deref()) {
            (true, Some(channel)) => FeedView::NoMatches { channel },
            (true, None) => FeedView::NoVideos,
            (false, _) => FeedView::Videos(&self.visible),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(id: i64, channel: &str, published_at: Option<&str>) -> VideoRecord {
        VideoRecord {
            id,
            video_id: format!("vid{id}"),
            title: format!("Video {id}"),
            channel_name: channel.to_string(),
            thumbnail_url: None,
            description: None,
            published_at: published_at.map(str::to_string),
            video_url: Some(format!("https://www.youtube.com/watch?v=vid{id}")),
            view_count: Some(100),
            tags: Vec::new(),
        }
    }

    fn ids(videos: &[VideoRecord]) -> Vec<i64> {
        videos.iter().map(|v| v.id).collect()
    }

    fn loaded_feed(videos: Vec<VideoRecord>) -> VideoFeed {
        let mut feed = VideoFeed::new();
        let ticket = feed.begin_load();
        assert!(feed.finish_load(ticket, Ok(videos)));
        feed
    }

    fn dated_set() -> Vec<VideoRecord> {
        vec![
            video(1, "A", Some("2024-02-01T00:00:00")),
            video(2, "B", Some("2024-03-01T00:00:00")),
            video(3, "A", Some("2024-01-01T00:00:00")),
            video(4, "C", Some("2024-03-01T00:00:00")),
            video(5, "A", Some("2023-12-24T18:00:00Z")),
        ]
    }

    #[test]
    fn channels_are_ranked_by_count() {
        let videos = vec![
            video(1, "B", None),
            video(2, "A", None),
            video(3, "A", None),
            video(4, "C", None),
            video(5, "A", None),
            video(6, "C", None),
        ];
        let channels = aggregate_channels(&videos);
        let ranked: Vec<(&str, usize)> = channels
            .iter()
            .map(|c| (c.channel_name.as_str(), c.count))
            .collect();
        assert_eq!(ranked, vec![("A", 3), ("C", 2), ("B", 1)]);
    }

    #[test]
    fn equal_counts_keep_first_seen_order() {
        let videos = vec![video(1, "Zeta", None), video(2, "Alpha", None), video(3, "Mid", None)];
        let names: Vec<String> = aggregate_channels(&videos)
            .into_iter()
            .map(|c| c.channel_name)
            .collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn aggregation_is_idempotent() {
        let videos = dated_set();
        let first = aggregate_channels(&videos);
        let second = aggregate_channels(&videos);
        assert_eq!(first, second);
    }

    #[test]
    fn top_eight_of_ten_single_video_channels() {
        let videos: Vec<VideoRecord> = (0..10)
            .map(|i| video(i, &format!("Channel {i}"), None))
            .collect();
        let first = aggregate_channels(&videos);
        assert_eq!(first.len(), 8);
        assert!(first.iter().all(|c| c.count == 1));
        assert_eq!(first, aggregate_channels(&videos));
        assert!(!first.iter().any(|c| c.channel_name == "Channel 8"));
        assert!(!first.iter().any(|c| c.channel_name == "Channel 9"));
    }

    #[test]
    fn channel_names_match_exactly() {
        let videos = vec![video(1, "PvP", None), video(2, "pvp", None), video(3, "PvP ", None)];
        assert_eq!(aggregate_channels(&videos).len(), 3);
        assert_eq!(ids(&visible_sequence(&videos, Some("PvP"), SortOrder::Newest)), vec![1]);
    }

    #[test]
    fn visible_sequence_is_pure() {
        let videos = dated_set();
        let snapshot = videos.clone();
        let first = visible_sequence(&videos, Some("A"), SortOrder::Oldest);
        let second = visible_sequence(&videos, Some("A"), SortOrder::Oldest);
        assert_eq!(first, second);
        assert_eq!(videos, snapshot);
    }

    #[test]
    fn sorts_filtered_set_by_date() {
        let videos = dated_set();
        assert_eq!(ids(&visible_sequence(&videos, Some("A"), SortOrder::Newest)), vec![1, 3, 5]);
        assert_eq!(ids(&visible_sequence(&videos, Some("A"), SortOrder::Oldest)), vec![5, 3, 1]);
    }

    #[test]
    fn newest_is_reverse_of_oldest_without_missing_dates() {
        let videos = dated_set();
        for filter in [None, Some("A"), Some("B")] {
            let mut newest = visible_sequence(&videos, filter, SortOrder::Newest);
            newest.reverse();
            assert_eq!(newest, visible_sequence(&videos, filter, SortOrder::Oldest));
        }
    }

    #[test]
    fn equal_dates_reverse_input_order_under_newest() {
        let videos = vec![
            video(1, "A", Some("2024-05-01T00:00:00")),
            video(2, "A", Some("2024-05-01T00:00:00")),
            video(3, "A", None),
            video(4, "A", None),
        ];
        assert_eq!(ids(&visible_sequence(&videos, None, SortOrder::Newest)), vec![2, 1, 4, 3]);
        assert_eq!(ids(&visible_sequence(&videos, None, SortOrder::Oldest)), vec![3, 4, 1, 2]);
    }

    #[test]
    fn missing_date_sinks_below_dated_record() {
        let videos = vec![video(1, "A", None), video(2, "A", Some("2024-01-01"))];
        assert_eq!(ids(&visible_sequence(&videos, None, SortOrder::Newest)), vec![2, 1]);
        assert_eq!(ids(&visible_sequence(&videos, None, SortOrder::Oldest)), vec![1, 2]);
    }

    #[test]
    fn unparseable_date_counts_as_missing() {
        let videos = vec![
            video(1, "A", Some("last tuesday")),
            video(2, "A", Some("1999-01-01T00:00:00")),
        ];
        assert_eq!(ids(&visible_sequence(&videos, None, SortOrder::Newest)), vec![2, 1]);
    }

    #[test]
    fn toggle_replaces_then_clears_selection() {
        let mut feed = loaded_feed(dated_set());
        feed.toggle_channel_filter("A");
        feed.toggle_channel_filter("B");
        assert_eq!(feed.selected_channel(), Some("B"));
        assert_eq!(ids(feed.visible()), vec![2]);

        feed.toggle_channel_filter("B");
        assert_eq!(feed.selected_channel(), None);
        assert_eq!(feed.visible().len(), 5);
    }

    #[test]
    fn clear_filter_shows_all_channels() {
        let mut feed = loaded_feed(dated_set());
        feed.toggle_channel_filter("C");
        feed.clear_channel_filter();
        assert_eq!(feed.selected_channel(), None);
        assert_eq!(feed.visible().len(), 5);
    }

    #[test]
    fn sort_order_applies_to_filtered_view() {
        let mut feed = loaded_feed(dated_set());
        feed.toggle_channel_filter("A");
        feed.set_sort_order(SortOrder::Oldest);
        assert_eq!(ids(feed.visible()), vec![5, 3, 1]);
        feed.clear_channel_filter();
        assert_eq!(feed.visible().len(), 5);
    }

    #[test]
    fn unknown_channel_shows_no_matches_state() {
        let mut feed = loaded_feed(vec![video(1, "A", None), video(2, "A", None), video(3, "B", None)]);
        feed.toggle_channel_filter("C");
        assert!(feed.visible().is_empty());
        assert_eq!(feed.view(), FeedView::NoMatches { channel: "C" });
    }

    #[test]
    fn empty_backend_shows_no_videos_state() {
        let feed = loaded_feed(Vec::new());
        assert_eq!(feed.view(), FeedView::NoVideos);
        assert!(feed.featured_channels().is_empty());
        assert_eq!(feed.error(), None);
    }

    #[test]
    fn failed_first_load_shows_no_videos_with_error() {
        let mut feed = VideoFeed::new();
        let ticket = feed.begin_load();
        assert_eq!(feed.view(), FeedView::Loading);
        feed.finish_load(ticket, Err(ApiError::Network("offline".into())));
        assert_eq!(feed.view(), FeedView::NoVideos);
        assert_eq!(feed.error(), Some(LOAD_ERROR_MESSAGE));
    }

    #[test]
    fn loaded_videos_show_video_state() {
        let feed = loaded_feed(dated_set());
        assert_eq!(feed.view(), FeedView::Videos(feed.visible()));
        assert_eq!(ids(feed.visible()), vec![4, 2, 1, 3, 5]);
    }

    #[test]
    fn failed_reload_keeps_previous_videos() {
        let mut feed = loaded_feed(dated_set());
        let ticket = feed.begin_load();
        feed.finish_load(
            ticket,
            Err(ApiError::Status {
                status: 500,
                body: "boom".into(),
            }),
        );
        assert_eq!(feed.visible().len(), 5);
        assert_eq!(feed.featured_channels().len(), 3);
        assert_eq!(feed.error(), Some(LOAD_ERROR_MESSAGE));
    }

    #[test]
    fn successful_reload_replaces_set_and_channels() {
        let mut feed = loaded_feed(dated_set());
        let ticket = feed.begin_load();
        feed.finish_load(ticket, Ok(vec![video(9, "Z", None)]));
        assert_eq!(ids(feed.visible()), vec![9]);
        assert_eq!(feed.featured_channels().len(), 1);
        assert_eq!(feed.featured_channels()[0].channel_name, "Z");
    }

    #[test]
    fn stale_load_cannot_overwrite_newer_one() {
        let mut feed = VideoFeed::new();
        let slow = feed.begin_load();
        let fast = feed.begin_load();

        assert!(feed.finish_load(fast, Ok(vec![video(2, "Fresh", None)])));
        assert!(!feed.finish_load(slow, Ok(vec![video(1, "Stale", None)])));
        assert_eq!(ids(feed.visible()), vec![2]);
    }

    #[test]
    fn sort_order_keys_round_trip() {
        for order in SortOrder::all_variants() {
            assert_eq!(SortOrder::from_key(order.key()), Some(order));
        }
        assert_eq!(SortOrder::from_key("popular"), None);
    }
}
