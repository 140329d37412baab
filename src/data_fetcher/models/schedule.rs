use super::common::{optional_string_or_number, string_or_number};
use serde::{Deserialize, Serialize};

const FINAL: &str = "FINAL";
const LIVE_PREFIX: &str = "LIVE";
const UPCOMING_PREFIX: &str = "UPCOMING";

/// Game state parsed once from the service's `gameStatus` string.
///
/// The raw text is kept for everything but `Final` so it can be shown as-is
/// (`"LIVE - 50'"` carries the match minute).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GameStatus {
    Final,
    Live(String),
    Upcoming(String),
    Other(String),
}

impl GameStatus {
    pub fn parse(raw: &str) -> Self {
        if raw == FINAL {
            GameStatus::Final
        } else if raw.starts_with(LIVE_PREFIX) {
            GameStatus::Live(raw.to_string())
        } else if raw.starts_with(UPCOMING_PREFIX) {
            GameStatus::Upcoming(raw.to_string())
        } else {
            GameStatus::Other(raw.to_string())
        }
    }

    /// The status text as the service sent it
    pub fn as_str(&self) -> &str {
        match self {
            GameStatus::Final => FINAL,
            GameStatus::Live(raw) | GameStatus::Upcoming(raw) | GameStatus::Other(raw) => raw,
        }
    }

    pub fn is_final(&self) -> bool {
        matches!(self, GameStatus::Final)
    }

    pub fn is_live(&self) -> bool {
        matches!(self, GameStatus::Live(_))
    }

    pub fn is_upcoming(&self) -> bool {
        matches!(self, GameStatus::Upcoming(_))
    }
}

impl From<String> for GameStatus {
    fn from(raw: String) -> Self {
        GameStatus::parse(&raw)
    }
}

impl From<GameStatus> for String {
    fn from(status: GameStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One fixture from the weekly schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Game {
    #[serde(rename = "gameID", deserialize_with = "string_or_number")]
    pub game_id: String,
    #[serde(rename = "homeTeamID", deserialize_with = "string_or_number")]
    pub home_team_id: String,
    #[serde(rename = "visitorTeamID", deserialize_with = "string_or_number")]
    pub visitor_team_id: String,
    #[serde(rename = "homeTeamName")]
    pub home_team_name: String,
    #[serde(rename = "visitorTeamName")]
    pub visitor_team_name: String,
    #[serde(
        rename = "homeTeamScore",
        default,
        deserialize_with = "optional_string_or_number"
    )]
    pub home_team_score: Option<String>,
    #[serde(
        rename = "visitorTeamScore",
        default,
        deserialize_with = "optional_string_or_number"
    )]
    pub visitor_team_score: Option<String>,
    #[serde(rename = "siteName", default)]
    pub site_name: Option<String>,
    #[serde(default)]
    pub television: Option<String>,
    /// Kickoff, e.g. `20130302T210000+0000`
    #[serde(rename = "gameDateTime")]
    pub game_date_time: String,
    #[serde(rename = "gameStatus")]
    pub game_status: GameStatus,
    #[serde(
        rename = "competitionID",
        default,
        deserialize_with = "optional_string_or_number"
    )]
    pub competition_id: Option<String>,
}

/// Body of the weekly schedule resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleResponse {
    pub games: Vec<Game>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEDULE_JSON: &str = r#"{
        "games": [
            {
                "homeTeamScore": 2,
                "visitorTeamScore": 1,
                "gameID": 32341,
                "siteName": "PPL Park",
                "television": "MLS LIVE",
                "visitorTeamID": 1326,
                "homeTeamID": 5513,
                "gameDateTime": "20130302T210000+0000",
                "competitionID": 98,
                "homeTeamName": "Philadelphia Union",
                "gameStatus": "FINAL",
                "visitorTeamName": "Sporting Kansas City"
            },
            {
                "homeTeamScore": null,
                "visitorTeamScore": null,
                "gameID": "32350",
                "siteName": null,
                "television": "NBCSN",
                "visitorTeamID": "1207",
                "homeTeamID": "1616",
                "gameDateTime": "20130309T020000+0000",
                "homeTeamName": "Seattle Sounders FC",
                "gameStatus": "UPCOMING",
                "visitorTeamName": "Montreal Impact"
            }
        ]
    }"#;

    #[test]
    fn test_schedule_response_deserialization() {
        let response: ScheduleResponse = serde_json::from_str(SCHEDULE_JSON).unwrap();
        assert_eq!(response.games.len(), 2);

        let finished = &response.games[0];
        assert_eq!(finished.game_id, "32341");
        assert_eq!(finished.home_team_id, "5513");
        assert_eq!(finished.home_team_score.as_deref(), Some("2"));
        assert_eq!(finished.site_name.as_deref(), Some("PPL Park"));
        assert_eq!(finished.competition_id.as_deref(), Some("98"));
        assert!(finished.game_status.is_final());

        let upcoming = &response.games[1];
        assert_eq!(upcoming.game_id, "32350");
        assert!(upcoming.home_team_score.is_none());
        assert!(upcoming.site_name.is_none());
        assert!(upcoming.competition_id.is_none());
        assert!(upcoming.game_status.is_upcoming());
    }

    #[test]
    fn test_status_categories_are_mutually_exclusive() {
        for raw in ["FINAL", "LIVE - 12'", "UPCOMING"] {
            let status = GameStatus::parse(raw);
            let flags = [status.is_final(), status.is_live(), status.is_upcoming()];
            assert_eq!(
                flags.iter().filter(|f| **f).count(),
                1,
                "exactly one category expected for {raw}"
            );
        }
    }

    #[test]
    fn test_status_keeps_raw_text() {
        let live = GameStatus::parse("LIVE - 50'");
        assert_eq!(live.as_str(), "LIVE - 50'");
        assert_eq!(live, GameStatus::Live("LIVE - 50'".to_string()));
        assert_eq!(GameStatus::parse("FINAL").as_str(), "FINAL");

        let other = GameStatus::parse("POSTPONED");
        assert_eq!(other, GameStatus::Other("POSTPONED".to_string()));
        assert_eq!(other.to_string(), "POSTPONED");
    }

    #[test]
    fn test_final_requires_exact_match() {
        assert!(matches!(GameStatus::parse("FINAL - AET"), GameStatus::Other(_)));
        assert!(matches!(GameStatus::parse("final"), GameStatus::Other(_)));
    }

    #[test]
    fn test_status_serializes_as_raw_string() {
        let value = serde_json::to_value(GameStatus::parse("LIVE - 12'")).unwrap();
        assert_eq!(value, serde_json::json!("LIVE - 12'"));
    }
}
