pub mod auth;
pub mod date_logic;
pub mod feed_api;
mod fetch_utils;
pub mod game_api;
pub mod http_client;
pub mod session;
pub mod urls;

// Re-export URL utilities
pub use urls::*;
// Re-export the session and every service operation
pub use auth::login;
pub use date_logic::{week_start_for_offset, week_start_for_offset_from};
pub use feed_api::{get_final_streams, get_game_live_stream, get_game_xml};
pub use game_api::{get_games, get_games_for_week, get_teams};
pub use session::Session;
