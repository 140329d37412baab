//! Parsing of the service's XML documents: the login result and the per-game
//! RSS feed listing stream URLs.

use crate::constants::xml::{
    CHANNEL_TAG, ITEM_TAG, LOGIN_CODE_TAG, LOGIN_RESULT_TAG, MEDIA_CONTENT_TAG, MEDIA_GROUP_TAG,
    RSS_TAG, STREAM_TYPE_TAG, URL_ATTRIBUTE,
};
use crate::data_fetcher::models::{FeedItem, StreamMap};
use crate::error::AppError;
use quick_xml::errors::IllFormedError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use tracing::{debug, warn};

fn get_attribute(e: &BytesStart, name: &[u8]) -> Result<Option<String>, AppError> {
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() == name {
            let value = attr.unescape_value().map_err(quick_xml::Error::from)?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

fn tag_name(e: &BytesStart) -> String {
    String::from_utf8_lossy(e.name().as_ref()).into_owned()
}

/// A document that ends while `open` still holds elements is truncated.
fn check_closed(open: &mut Vec<String>) -> Result<(), AppError> {
    match open.pop() {
        Some(name) => Err(quick_xml::Error::IllFormed(IllFormedError::MissingEndTag(name)).into()),
        None => Ok(()),
    }
}

/// Extracts the text of the first `code` element inside the first `result`
/// element of a login response. `Ok(None)` when either element is absent.
///
/// The whole document is read, so a truncated or otherwise ill-formed body
/// is an `AppError::XmlParse` even when the code itself was readable.
pub fn parse_login_code(xml: &str) -> Result<Option<String>, AppError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut open: Vec<String> = Vec::new();
    let mut result_depth: Option<usize> = None;
    let mut result_done = false;
    let mut code_depth: Option<usize> = None;
    let mut code: Option<String> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                open.push(tag_name(&e));
                let name = e.name();
                if result_depth.is_none() {
                    if name.as_ref() == LOGIN_RESULT_TAG {
                        result_depth = Some(open.len());
                    }
                } else if !result_done && code.is_none() && name.as_ref() == LOGIN_CODE_TAG {
                    code_depth = Some(open.len());
                    code = Some(String::new());
                }
            }
            Event::Empty(e) => {
                if result_depth.is_some()
                    && !result_done
                    && code.is_none()
                    && e.name().as_ref() == LOGIN_CODE_TAG
                {
                    code = Some(String::new());
                }
            }
            Event::Text(t) => {
                if code_depth.is_some()
                    && let Some(code) = code.as_mut()
                {
                    code.push_str(&t.unescape().map_err(quick_xml::Error::from)?);
                }
            }
            Event::CData(c) => {
                if code_depth.is_some()
                    && let Some(code) = code.as_mut()
                {
                    code.push_str(&String::from_utf8_lossy(&c));
                }
            }
            Event::End(_) => {
                let closing = open.len();
                if code_depth == Some(closing) {
                    code_depth = None;
                } else if result_depth == Some(closing) {
                    result_done = true;
                }
                open.pop();
            }
            Event::Eof => {
                check_closed(&mut open)?;
                break;
            }
            _ => {}
        }
    }

    Ok(code.map(|c| c.trim().to_string()))
}

/// Reads the `item` entries of the first `rss/channel` in a game feed.
///
/// # Errors
/// * `AppError::XmlParse` - the document is not well-formed, including one
///   that ends before its elements are closed
/// * `AppError::FeedMissingElement` - no `rss` root or no `channel` inside it
pub fn parse_feed_items(xml: &str) -> Result<Vec<FeedItem>, AppError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut open: Vec<String> = Vec::new();
    let mut rss_depth: Option<usize> = None;
    let mut channel_depth: Option<usize> = None;
    let mut channel_done = false;
    let mut item: Option<(usize, FeedItem)> = None;
    let mut type_depth: Option<usize> = None;
    let mut type_text = String::new();
    let mut group_depth: Option<usize> = None;
    let mut items = Vec::new();

    loop {
        let event = reader.read_event()?;
        match event {
            Event::Start(ref e) | Event::Empty(ref e) => {
                let is_empty = matches!(event, Event::Empty(_));
                if !is_empty {
                    open.push(tag_name(e));
                }
                let depth = open.len();
                let name = e.name();
                let name = name.as_ref();

                if channel_done {
                    continue;
                }
                if rss_depth.is_none() {
                    if name == RSS_TAG && !is_empty {
                        rss_depth = Some(depth);
                    }
                } else if channel_depth.is_none() {
                    if name == CHANNEL_TAG && !is_empty {
                        channel_depth = Some(depth);
                    }
                } else if let Some((_, current)) = item.as_mut() {
                    if name == STREAM_TYPE_TAG {
                        if current.stream_type.is_none() && type_depth.is_none() && !is_empty {
                            type_depth = Some(depth);
                            type_text.clear();
                        }
                    } else if name == MEDIA_GROUP_TAG {
                        if !current.has_media_group {
                            current.has_media_group = true;
                            if !is_empty {
                                group_depth = Some(depth);
                            }
                        }
                    } else if name == MEDIA_CONTENT_TAG
                        && group_depth.is_some()
                        && current.content_url.is_none()
                    {
                        let url = get_attribute(e, URL_ATTRIBUTE)?;
                        current.content_url = Some(url.unwrap_or_default());
                    }
                } else if name == ITEM_TAG {
                    if is_empty {
                        items.push(FeedItem::default());
                    } else {
                        item = Some((depth, FeedItem::default()));
                    }
                }
            }
            Event::Text(ref t) => {
                if type_depth.is_some() {
                    type_text.push_str(&t.unescape().map_err(quick_xml::Error::from)?);
                }
            }
            Event::CData(ref c) => {
                if type_depth.is_some() {
                    type_text.push_str(&String::from_utf8_lossy(c));
                }
            }
            Event::End(_) => {
                let closing = open.len();
                open.pop();

                if type_depth == Some(closing) {
                    type_depth = None;
                    let text = type_text.trim();
                    if !text.is_empty()
                        && let Some((_, current)) = item.as_mut()
                    {
                        current.stream_type = Some(text.to_string());
                    }
                } else if group_depth == Some(closing) {
                    group_depth = None;
                } else if item.as_ref().is_some_and(|(d, _)| *d == closing) {
                    if let Some((_, finished)) = item.take() {
                        items.push(finished);
                    }
                } else if channel_depth == Some(closing) || rss_depth == Some(closing) {
                    // Only the first channel counts; keep reading to validate the rest
                    channel_done = true;
                }
            }
            Event::Eof => {
                check_closed(&mut open)?;
                break;
            }
            _ => {}
        }
    }

    if rss_depth.is_none() {
        return Err(AppError::feed_missing_element("rss"));
    }
    if channel_depth.is_none() {
        return Err(AppError::feed_missing_element("channel"));
    }

    debug!("Parsed {} feed items", items.len());
    Ok(items)
}

/// Maps each item's stream type to its first content URL.
///
/// Items without a media group are skipped, as are items whose group has no
/// content or that carry no type tag. Duplicate types: the last item wins.
pub fn streams_from_items(items: &[FeedItem]) -> StreamMap {
    let mut streams = StreamMap::new();

    for item in items.iter().filter(|item| item.has_media_group) {
        match (&item.stream_type, &item.content_url) {
            (Some(stream_type), Some(url)) => {
                streams.insert(stream_type.clone(), url.clone());
            }
            (None, _) => warn!("Skipping feed item with a media group but no type tag"),
            (Some(stream_type), None) => {
                warn!("Skipping '{stream_type}' feed item: media group has no content")
            }
        }
    }

    streams
}

/// The content URL of the first item that has a media group, or an empty
/// string when no item has one.
pub fn live_stream_from_items(items: &[FeedItem]) -> String {
    items
        .iter()
        .filter(|item| item.has_media_group)
        .find_map(|item| item.content_url.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::TestDataBuilder;

    #[test]
    fn test_parse_login_code_success() {
        let xml = TestDataBuilder::login_response_xml("loginsuccess");
        assert_eq!(
            parse_login_code(&xml).unwrap().as_deref(),
            Some("loginsuccess")
        );
    }

    #[test]
    fn test_parse_login_code_takes_code_inside_result_only() {
        let xml = r#"<response>
            <code>outer</code>
            <result><status>1</status><code>loginfailed</code><code>second</code></result>
            <result><code>later</code></result>
        </response>"#;
        assert_eq!(parse_login_code(xml).unwrap().as_deref(), Some("loginfailed"));
    }

    #[test]
    fn test_parse_login_code_missing_elements() {
        assert_eq!(parse_login_code("<response><code>x</code></response>").unwrap(), None);
        assert_eq!(parse_login_code("<result><message/></result>").unwrap(), None);
        assert_eq!(parse_login_code("<result><code/></result>").unwrap().as_deref(), Some(""));
    }

    #[test]
    fn test_parse_login_code_malformed_xml() {
        let result = parse_login_code("<result><code>loginsuccess</result>");
        assert!(matches!(result, Err(AppError::XmlParse(_))));
    }

    #[test]
    fn test_parse_login_code_truncated_body_is_xml_error() {
        let result = parse_login_code("<response><result><code>loginsuccess</code>");
        assert!(matches!(
            result,
            Err(AppError::XmlParse(quick_xml::Error::IllFormed(
                IllFormedError::MissingEndTag(ref tag)
            ))) if tag == "result"
        ));
    }

    #[test]
    fn test_parse_login_code_reads_past_result() {
        let result = parse_login_code("<result><code>loginsuccess</code></result><<<");
        assert!(matches!(result, Err(AppError::XmlParse(_))));
    }

    #[test]
    fn test_parse_feed_items() {
        let items = parse_feed_items(&TestDataBuilder::game_feed_xml()).unwrap();
        assert_eq!(items.len(), 3);

        assert_eq!(items[0].stream_type.as_deref(), Some("preview"));
        assert!(!items[0].has_media_group);
        assert!(items[0].content_url.is_none());

        assert_eq!(items[1].stream_type.as_deref(), Some("full_game"));
        assert!(items[1].has_media_group);
        assert_eq!(
            items[1].content_url.as_deref(),
            Some("http://streams.example.com/32341/full_game.m3u8")
        );
    }

    #[test]
    fn test_final_streams_skip_items_without_media_group() {
        let items = parse_feed_items(&TestDataBuilder::game_feed_xml()).unwrap();
        let streams = streams_from_items(&items);

        assert_eq!(streams.len(), 2);
        assert!(!streams.contains_key("preview"));
        assert_eq!(
            streams.get("full_game").map(String::as_str),
            Some("http://streams.example.com/32341/full_game.m3u8")
        );
        assert_eq!(
            streams.get("condensed_game").map(String::as_str),
            Some("http://streams.example.com/32341/condensed.m3u8")
        );
    }

    #[test]
    fn test_live_stream_is_first_item_with_media_group() {
        let items = parse_feed_items(&TestDataBuilder::game_feed_xml()).unwrap();
        assert_eq!(
            live_stream_from_items(&items),
            "http://streams.example.com/32341/full_game.m3u8"
        );
    }

    #[test]
    fn test_live_stream_empty_when_no_media() {
        let xml = r#"<rss><channel><item><nl:type>preview</nl:type></item></channel></rss>"#;
        let items = parse_feed_items(xml).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(live_stream_from_items(&items), "");
        assert!(streams_from_items(&items).is_empty());
    }

    #[test]
    fn test_item_without_type_is_skipped() {
        let xml = r#"<rss><channel>
            <item><media:group><media:content url="http://a/untyped.m3u8"/></media:group></item>
            <item><nl:type>highlights</nl:type><media:group><media:content url="http://a/hl.m3u8"/></media:group></item>
        </channel></rss>"#;
        let items = parse_feed_items(xml).unwrap();
        let streams = streams_from_items(&items);

        assert_eq!(streams.len(), 1);
        assert_eq!(streams.get("highlights").map(String::as_str), Some("http://a/hl.m3u8"));
        // The live lookup does not care about the type tag
        assert_eq!(live_stream_from_items(&items), "http://a/untyped.m3u8");
    }

    #[test]
    fn test_content_url_is_unescaped() {
        let xml = r#"<rss><channel><item><nl:type>full_game</nl:type>
            <media:group><media:content url="http://a/play?id=1&amp;q=hd"/></media:group>
        </item></channel></rss>"#;
        let streams = streams_from_items(&parse_feed_items(xml).unwrap());
        assert_eq!(
            streams.get("full_game").map(String::as_str),
            Some("http://a/play?id=1&q=hd")
        );
    }

    #[test]
    fn test_items_outside_first_channel_are_ignored() {
        let xml = r#"<rss>
            <item><nl:type>stray</nl:type><media:group><media:content url="http://a/stray"/></media:group></item>
            <channel><item><nl:type>full_game</nl:type><media:group><media:content url="http://a/full"/></media:group></item></channel>
            <channel><item><nl:type>other</nl:type><media:group><media:content url="http://a/other"/></media:group></item></channel>
        </rss>"#;
        let streams = streams_from_items(&parse_feed_items(xml).unwrap());
        assert_eq!(streams.len(), 1);
        assert!(streams.contains_key("full_game"));
    }

    #[test]
    fn test_missing_rss_or_channel() {
        assert!(matches!(
            parse_feed_items("<feed><channel/></feed>"),
            Err(AppError::FeedMissingElement { ref element }) if element == "rss"
        ));
        assert!(matches!(
            parse_feed_items("<rss version=\"2.0\"></rss>"),
            Err(AppError::FeedMissingElement { ref element }) if element == "channel"
        ));
    }

    #[test]
    fn test_malformed_feed_is_xml_error() {
        let result = parse_feed_items("<rss><channel><item></channel></rss>");
        assert!(matches!(result, Err(AppError::XmlParse(_))));
    }

    #[test]
    fn test_truncated_feed_is_xml_error() {
        let inside_item = r#"<rss><channel><item><nl:type>full_game</nl:type><media:group><media:content url="http://a/1"/></media:group>"#;
        assert!(matches!(
            parse_feed_items(inside_item),
            Err(AppError::XmlParse(quick_xml::Error::IllFormed(
                IllFormedError::MissingEndTag(ref tag)
            ))) if tag == "item"
        ));

        let after_item = format!("{inside_item}</item>");
        assert!(matches!(
            parse_feed_items(&after_item),
            Err(AppError::XmlParse(_))
        ));
    }

    #[test]
    fn test_content_after_first_channel_must_be_well_formed() {
        let xml = r#"<rss><channel><item><nl:type>full_game</nl:type></item></channel><channel><item></rss>"#;
        assert!(matches!(parse_feed_items(xml), Err(AppError::XmlParse(_))));
    }

    #[test]
    fn test_duplicate_stream_types_keep_one_entry() {
        let xml = r#"<rss><channel>
            <item><nl:type>full_game</nl:type><media:group><media:content url="http://a/1"/></media:group></item>
            <item><nl:type>full_game</nl:type><media:group><media:content url="http://a/2"/></media:group></item>
        </channel></rss>"#;
        let streams = streams_from_items(&parse_feed_items(xml).unwrap());
        assert_eq!(streams.len(), 1);
        assert!(streams.contains_key("full_game"));
    }
}
