//! URL building utilities for service endpoints

use crate::config::Endpoints;
use crate::constants::SCHEDULE_DATE_FORMAT;
use chrono::NaiveDate;

/// Builds the weekly schedule URL for the week starting on `monday`.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use mls_live::config::Endpoints;
/// use mls_live::data_fetcher::api::build_games_url;
///
/// let endpoints = Endpoints::with_base_url("http://cdn.example.com");
/// let monday = NaiveDate::from_ymd_opt(2013, 3, 4).unwrap();
/// assert_eq!(
///     build_games_url(&endpoints, monday),
///     "http://cdn.example.com/iphone/v5/prod/games_for_week_2013-03-04.js"
/// );
/// ```
pub fn build_games_url(endpoints: &Endpoints, monday: NaiveDate) -> String {
    format!(
        "{}{}{}",
        endpoints.games_url_prefix,
        monday.format(SCHEDULE_DATE_FORMAT),
        endpoints.games_url_suffix
    )
}

/// Builds the per-game feed URL.
///
/// # Example
/// ```
/// use mls_live::config::Endpoints;
/// use mls_live::data_fetcher::api::build_game_feed_url;
///
/// let endpoints = Endpoints::default();
/// assert_eq!(
///     build_game_feed_url(&endpoints, "32341"),
///     "http://mls.cdnak.neulion.com/mobile/feeds/game/2011/32341_ced.xml"
/// );
/// ```
pub fn build_game_feed_url(endpoints: &Endpoints, game_id: &str) -> String {
    format!(
        "{}{}{}",
        endpoints.game_feed_prefix, game_id, endpoints.game_feed_suffix
    )
}
