use super::common::string_or_number;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Team {
    #[serde(rename = "teamID", deserialize_with = "string_or_number")]
    pub team_id: String,
    pub abbr: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamsResponse {
    pub teams: Vec<Team>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teams_response_deserialization() {
        let json = r#"{
            "teams": [
                {"teamID": 1326, "abbr": "SKC", "name": "Sporting Kansas City"},
                {"teamID": "5513", "abbr": "PHI"}
            ]
        }"#;

        let response: TeamsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.teams.len(), 2);
        assert_eq!(response.teams[0].team_id, "1326");
        assert_eq!(response.teams[0].abbr, "SKC");
        assert_eq!(response.teams[1].team_id, "5513");
    }

    #[test]
    fn test_team_without_abbr_is_rejected() {
        let json = r#"{"teams": [{"teamID": 1}]}"#;
        assert!(serde_json::from_str::<TeamsResponse>(json).is_err());
    }
}
