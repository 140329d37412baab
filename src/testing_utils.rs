use crate::data_fetcher::models::{Game, GameStatus, Team};

/// Test utilities for creating mock data and testing scenarios
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Creates a game between two named teams kicking off 2013-03-02 21:00 UTC
    pub fn create_game(game_id: &str, visitor: &str, home: &str, status: &str) -> Game {
        Game {
            game_id: game_id.to_string(),
            home_team_id: "5513".to_string(),
            visitor_team_id: "1326".to_string(),
            home_team_name: home.to_string(),
            visitor_team_name: visitor.to_string(),
            home_team_score: None,
            visitor_team_score: None,
            site_name: Some("PPL Park".to_string()),
            television: Some("MLS LIVE".to_string()),
            game_date_time: "20130302T210000+0000".to_string(),
            game_status: GameStatus::parse(status),
            competition_id: Some("98".to_string()),
        }
    }

    /// Creates Sporting Kansas City at Philadelphia Union with the given status
    pub fn create_game_with_status(status: &str) -> Game {
        let mut game = Self::create_game(
            "32341",
            "Sporting Kansas City",
            "Philadelphia Union",
            status,
        );
        if !game.game_status.is_upcoming() {
            game.home_team_score = Some("2".to_string());
            game.visitor_team_score = Some("1".to_string());
        }
        game
    }

    pub fn create_team(team_id: &str, abbr: &str) -> Team {
        Team {
            team_id: team_id.to_string(),
            abbr: abbr.to_string(),
        }
    }

    /// A small league table of teams keyed by numeric IDs
    pub fn create_teams() -> Vec<Team> {
        vec![
            Self::create_team("1326", "SKC"),
            Self::create_team("5513", "PHI"),
            Self::create_team("1616", "SEA"),
        ]
    }

    /// Login endpoint response carrying the given result code
    pub fn login_response_xml(code: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<response>
  <result>
    <code>{code}</code>
    <message>ok</message>
  </result>
</response>"#
        )
    }

    /// Per-game feed with a full replay, a condensed game, and an item
    /// without any media group
    pub fn game_feed_xml() -> String {
        r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:media="http://search.yahoo.com/mrss/" xmlns:nl="http://www.neulion.com">
  <channel>
    <title>Sporting Kansas City at Philadelphia Union</title>
    <item>
      <title>Preview</title>
      <nl:type>preview</nl:type>
    </item>
    <item>
      <title>Full Replay</title>
      <nl:type>full_game</nl:type>
      <media:group>
        <media:content url="http://streams.example.com/32341/full_game.m3u8" bitrate="1600"/>
        <media:content url="http://streams.example.com/32341/full_game_low.m3u8" bitrate="400"/>
      </media:group>
    </item>
    <item>
      <title>Condensed</title>
      <nl:type>condensed_game</nl:type>
      <media:group>
        <media:content url="http://streams.example.com/32341/condensed.m3u8"/>
      </media:group>
    </item>
  </channel>
</rss>"#
            .to_string()
    }
}
