// Per-game feed operations: the raw XML and the stream URLs it lists

use super::fetch_utils::fetch_text;
use super::session::Session;
use super::urls::build_game_feed_url;
use crate::data_fetcher::models::StreamMap;
use crate::data_fetcher::processors::{live_stream_from_items, parse_feed_items, streams_from_items};
use crate::error::AppError;
use tracing::{error, info, instrument};

/// Fetches the per-game feed document.
#[instrument(skip(session))]
pub async fn get_game_xml(session: &Session, game_id: &str) -> Result<String, AppError> {
    let url = build_game_feed_url(session.endpoints(), game_id);
    fetch_text(session.client(), &url)
        .await
        .inspect_err(|e| error!("Unable to get game XML configuration: {e}"))
}

/// Streams of a finished game keyed by archive type (`full_game`,
/// `condensed_game`, ...). Feed items without a media group are left out.
pub async fn get_final_streams(session: &Session, game_id: &str) -> Result<StreamMap, AppError> {
    let xml = get_game_xml(session, game_id).await?;
    let items = parse_feed_items(&xml)?;
    let streams = streams_from_items(&items);

    info!("Game {game_id}: {} archived streams", streams.len());
    Ok(streams)
}

/// The stream of a game in progress: the first content URL in the feed.
/// An empty string means the feed lists no stream yet.
pub async fn get_game_live_stream(session: &Session, game_id: &str) -> Result<String, AppError> {
    let xml = get_game_xml(session, game_id).await?;
    let items = parse_feed_items(&xml)?;
    let url = live_stream_from_items(&items);

    if url.is_empty() {
        info!("Game {game_id}: no live stream in feed");
    }
    Ok(url)
}
