use crate::data_fetcher::models::{Game, Team};
use std::fmt::Display;
use tracing::trace;

/// Looks up a team's abbreviation by ID.
///
/// IDs are compared in their string form, so `1326` and `"1326"` find the
/// same team. Returns the first match, or `None` if no team has that ID.
///
/// # Example
/// ```
/// use mls_live::data_fetcher::get_team_abbr;
/// use mls_live::data_fetcher::models::Team;
///
/// let teams = vec![Team { team_id: "1326".to_string(), abbr: "SKC".to_string() }];
/// assert_eq!(get_team_abbr(&teams, 1326), Some("SKC"));
/// assert_eq!(get_team_abbr(&teams, "1326"), Some("SKC"));
/// assert_eq!(get_team_abbr(&teams, 9), None);
/// ```
pub fn get_team_abbr<'a>(teams: &'a [Team], id: impl Display) -> Option<&'a str> {
    let id = id.to_string();
    let abbr = teams
        .iter()
        .find(|team| team.team_id == id)
        .map(|team| team.abbr.as_str());

    if abbr.is_none() {
        trace!("No team with ID {id} among {} teams", teams.len());
    }
    abbr
}

/// `"<visitor abbr> <separator> <home abbr>"`, falling back to the full team
/// names when an ID is not in the team list.
pub fn matchup_abbreviation(game: &Game, teams: &[Team], separator: &str) -> String {
    let visitor =
        get_team_abbr(teams, &game.visitor_team_id).unwrap_or(&game.visitor_team_name);
    let home = get_team_abbr(teams, &game.home_team_id).unwrap_or(&game.home_team_name);
    format!("{visitor} {separator} {home}")
}
