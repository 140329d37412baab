//! Display strings for games and archived streams.

use super::game_status::shows_status_text;
use super::time_formatting::format_game_date_time_in_timezone;
use crate::data_fetcher::models::Game;
use chrono::{Local, TimeZone};
use std::fmt::Display;
use tracing::warn;

/// Title-cases text word by word: a letter that follows another letter is
/// lower-cased, every other letter is upper-cased.
///
/// # Example
/// ```
/// use mls_live::data_fetcher::processors::title_case;
///
/// assert_eq!(title_case("LIVE - 50'"), "Live - 50'");
/// assert_eq!(title_case("condensed_game"), "Condensed_Game");
/// ```
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut previous_is_letter = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            result.push(c);
            previous_is_letter = false;
        }
    }

    result
}

/// Relabels an archived game's title with the kind of archive.
///
/// Everything from the first `(` is dropped and the archive type is appended
/// in parentheses, title-cased with underscores as spaces.
///
/// # Example
/// ```
/// use mls_live::data_fetcher::processors::adjust_archive_string;
///
/// let title = adjust_archive_string("Team A vs Team B (Full Replay)", "condensed_game");
/// assert_eq!(title, "Team A vs Team B (Condensed Game)");
/// ```
pub fn adjust_archive_string(title: &str, archive_type: &str) -> String {
    let base = title.split('(').next().unwrap_or(title);
    let label = title_case(archive_type).replace('_', " ");
    format!("{base}({label})")
}

/// Builds `"<visitor> <separator> <home> (<detail>)"` where detail is the
/// title-cased status for final and live games, otherwise the kickoff in
/// local time.
pub fn game_string(game: &Game, separator: &str) -> String {
    game_string_in_timezone(game, separator, &Local)
}

/// [`game_string`] with the kickoff rendered in an explicit timezone.
pub fn game_string_in_timezone<Tz>(game: &Game, separator: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let detail = if shows_status_text(game) {
        title_case(game.game_status.as_str())
    } else {
        match format_game_date_time_in_timezone(&game.game_date_time, tz) {
            Ok(kickoff) => kickoff,
            Err(e) => {
                warn!("Game {}: {e}", game.game_id);
                game.game_date_time.clone()
            }
        }
    };

    format!(
        "{} {} {} ({})",
        game.visitor_team_name, separator, game.home_team_name, detail
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::TestDataBuilder;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("FINAL"), "Final");
        assert_eq!(title_case("LIVE - 12'"), "Live - 12'");
        assert_eq!(title_case("full_replay"), "Full_Replay");
        assert_eq!(title_case("hIGHLIGHTS"), "Highlights");
        assert_eq!(title_case(""), "");
        assert_eq!(title_case("2nd half"), "2Nd Half");
    }

    #[test]
    fn test_adjust_archive_string() {
        assert_eq!(
            adjust_archive_string("Team A vs Team B (Full Replay)", "condensed_game"),
            "Team A vs Team B (Condensed Game)"
        );
        assert_eq!(
            adjust_archive_string("Team A vs Team B (Final) (Extra)", "highlights"),
            "Team A vs Team B (Highlights)"
        );
    }

    #[test]
    fn test_adjust_archive_string_without_parenthesis() {
        assert_eq!(
            adjust_archive_string("Team A vs Team B", "full_game"),
            "Team A vs Team B(Full Game)"
        );
    }

    #[test]
    fn test_game_string_final_shows_status() {
        let game = TestDataBuilder::create_game_with_status("FINAL");
        let text = game_string_in_timezone(&game, "at", &Utc);
        assert_eq!(text, "Sporting Kansas City at Philadelphia Union (Final)");
        assert!(!text.contains("03/02"));
    }

    #[test]
    fn test_game_string_live_shows_minute() {
        let game = TestDataBuilder::create_game_with_status("LIVE - 50'");
        assert_eq!(
            game_string_in_timezone(&game, "@", &Utc),
            "Sporting Kansas City @ Philadelphia Union (Live - 50')"
        );
    }

    #[test]
    fn test_game_string_upcoming_shows_local_kickoff() {
        let game = TestDataBuilder::create_game_with_status("UPCOMING");
        let eastern = FixedOffset::west_opt(5 * 3600).unwrap();
        let text = game_string_in_timezone(&game, "at", &eastern);
        assert_eq!(text, "Sporting Kansas City at Philadelphia Union (03/02 16:00)");
        assert!(!text.contains("Upcoming"));
    }

    #[test]
    fn test_game_string_unparseable_kickoff_falls_back_to_raw() {
        let mut game = TestDataBuilder::create_game_with_status("UPCOMING");
        game.game_date_time = "TBD".to_string();
        assert_eq!(
            game_string_in_timezone(&game, "vs", &Utc),
            "Sporting Kansas City vs Philadelphia Union (TBD)"
        );
    }
}
