//! MLS Live client library
//!
//! Logs in to the MLS Live streaming service, fetches weekly game schedules
//! and the team list, and resolves stream URLs from a game's feed.
//!
//! # Examples
//!
//! ```rust,no_run
//! use mls_live::data_fetcher::{Session, game_string, get_final_streams, get_games, login};
//! use mls_live::{AppError, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let session = Session::new(&config)?;
//!     login(&session, "fan@example.com", "secret").await?;
//!
//!     for game in get_games(&session, 0).await? {
//!         println!("{}", game_string(&game, "at"));
//!         if game.game_status.is_final() {
//!             for (kind, url) in get_final_streams(&session, &game.game_id).await? {
//!                 println!("  {kind}: {url}");
//!             }
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Every operation returns `Result<_, AppError>`. Callers that only care
//! whether a call worked can collapse it with `.ok()` or `.is_ok()`.

pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::Session;
pub use data_fetcher::models::{Game, GameStatus, StreamMap, Team};
pub use error::AppError;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
