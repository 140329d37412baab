//! Application-wide constants and default endpoint values
//!
//! The service has no published API; these are the URLs its mobile clients use.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Default service endpoints
pub mod endpoints {
    /// Form login, answers with an XML `result/code` document
    pub const LOGIN_URL: &str = "https://live.mlssoccer.com/mlsmdl/secure/login";

    /// Weekly schedule is `<prefix><monday as YYYY-MM-DD><suffix>`
    pub const GAMES_URL_PREFIX: &str =
        "http://mobile.cdn.mlssoccer.com/iphone/v5/prod/games_for_week_";
    pub const GAMES_URL_SUFFIX: &str = ".js";

    pub const TEAMS_URL: &str = "http://mobile.cdn.mlssoccer.com/iphone/v5/prod/teams_2013.js";

    // The feed path still carries 2011 for every season.
    pub const GAME_FEED_PREFIX: &str = "http://mls.cdnak.neulion.com/mobile/feeds/game/2011/";
    pub const GAME_FEED_SUFFIX: &str = "_ced.xml";
}

/// Tokens and tag names used by the service's XML documents
pub mod xml {
    /// Result code the login endpoint sends on success
    pub const LOGIN_SUCCESS_CODE: &str = "loginsuccess";

    pub const LOGIN_RESULT_TAG: &[u8] = b"result";
    pub const LOGIN_CODE_TAG: &[u8] = b"code";

    pub const RSS_TAG: &[u8] = b"rss";
    pub const CHANNEL_TAG: &[u8] = b"channel";
    pub const ITEM_TAG: &[u8] = b"item";
    pub const STREAM_TYPE_TAG: &[u8] = b"nl:type";
    pub const MEDIA_GROUP_TAG: &[u8] = b"media:group";
    pub const MEDIA_CONTENT_TAG: &[u8] = b"media:content";
    pub const URL_ATTRIBUTE: &[u8] = b"url";
}

/// Environment variable names
pub mod env_vars {
    pub const USERNAME: &str = "MLS_LIVE_USERNAME";
    pub const PASSWORD: &str = "MLS_LIVE_PASSWORD";
    pub const LOG_FILE: &str = "MLS_LIVE_LOG_FILE";
    pub const HTTP_TIMEOUT: &str = "MLS_LIVE_HTTP_TIMEOUT";
}

/// Wire format of the kickoff timestamp, without the trailing offset
pub const GAME_DATE_TIME_FORMAT: &str = "%Y%m%dT%H%M%S";

/// Display format for a kickoff in local time
pub const GAME_DISPLAY_FORMAT: &str = "%m/%d %H:%M";

/// Date format used in the weekly schedule URL
pub const SCHEDULE_DATE_FORMAT: &str = "%Y-%m-%d";

pub const DEFAULT_LOG_FILE_NAME: &str = "mls_live.log";
