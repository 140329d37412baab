pub mod api;
pub mod game_utils;
pub mod models;
pub mod processors;

pub use api::{
    Session, get_final_streams, get_game_live_stream, get_game_xml, get_games, get_teams, login,
};
pub use game_utils::{get_team_abbr, matchup_abbreviation};
pub use models::{Game, GameStatus, StreamMap, Team};
pub use processors::{
    adjust_archive_string, format_game_date_time, game_string, is_game_live, is_game_upcoming,
};
