pub mod feed_parsing;
pub mod formatting;
pub mod game_status;
pub mod time_formatting;

pub use feed_parsing::{live_stream_from_items, parse_feed_items, parse_login_code, streams_from_items};
pub use formatting::{adjust_archive_string, game_string, game_string_in_timezone, title_case};
pub use game_status::{is_game_final, is_game_live, is_game_upcoming, shows_status_text};
pub use time_formatting::{
    format_game_date_time, format_game_date_time_in_timezone, parse_game_date_time,
};
