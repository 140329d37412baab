use std::collections::BTreeMap;

/// Stream-type label (the feed's `nl:type`, e.g. `condensed_game`) to playback URL.
pub type StreamMap = BTreeMap<String, String>;

/// One `item` of a per-game feed, reduced to what stream lookup needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedItem {
    /// Text of the item's first `nl:type` element
    pub stream_type: Option<String>,
    /// Whether the item has at least one `media:group`
    pub has_media_group: bool,
    /// `url` of the first `media:content` in the first `media:group`
    pub content_url: Option<String>,
}
