// Schedule and team list operations

use super::date_logic::week_start_for_offset;
use super::fetch_utils::fetch;
use super::session::Session;
use super::urls::build_games_url;
use crate::data_fetcher::models::{Game, ScheduleResponse, Team, TeamsResponse};
use crate::error::AppError;
use chrono::NaiveDate;
use tracing::{error, info, instrument};

/// Fetches the games of the week `week_offset` weeks from the current one
/// (0 = this week, -1 = last week).
pub async fn get_games(session: &Session, week_offset: i64) -> Result<Vec<Game>, AppError> {
    let monday = week_start_for_offset(week_offset)?;
    get_games_for_week(session, monday).await
}

/// Fetches the games of the week starting on `monday`.
#[instrument(skip(session))]
pub async fn get_games_for_week(
    session: &Session,
    monday: NaiveDate,
) -> Result<Vec<Game>, AppError> {
    let url = build_games_url(session.endpoints(), monday);
    let response: ScheduleResponse = fetch(session.client(), &url)
        .await
        .inspect_err(|e| error!("Unable to load game list: {e}"))?;

    info!("Week of {monday}: {} games", response.games.len());
    Ok(response.games)
}

/// Fetches the list of teams, used to resolve team IDs to abbreviations.
#[instrument(skip(session))]
pub async fn get_teams(session: &Session) -> Result<Vec<Team>, AppError> {
    let url = &session.endpoints().teams_url;
    let response: TeamsResponse = fetch(session.client(), url)
        .await
        .inspect_err(|e| error!("Unable to load team list: {e}"))?;

    info!("Loaded {} teams", response.teams.len());
    Ok(response.teams)
}
