use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::validation::{validate_drawn, validate_games};
use crate::error::Result;
use crate::models::Combination;
use crate::scoring::ScoredCombination;
use crate::services::check::{CheckStatistics, DrawSummary};

/// Request payload for checking games against every draw in a date range
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CheckRangeRequest {
    #[validate(
        length(min = 1, message = "At least one game is required"),
        custom(function = "validate_games")
    )]
    pub games: Vec<Vec<u8>>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Request payload for checking games against numbers entered by hand
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ManualCheckRequest {
    #[validate(
        length(min = 1, message = "At least one game is required"),
        custom(function = "validate_games")
    )]
    pub games: Vec<Vec<u8>>,
    #[validate(custom(function = "validate_drawn"))]
    pub drawn: Vec<u8>,
}

fn combinations(games: &[Vec<u8>]) -> Result<Vec<Combination>> {
    games
        .iter()
        .map(|g| Combination::new(g.iter().copied()))
        .collect()
}

impl CheckRangeRequest {
    pub fn combinations(&self) -> Result<Vec<Combination>> {
        combinations(&self.games)
    }
}

impl ManualCheckRequest {
    pub fn combinations(&self) -> Result<Vec<Combination>> {
        combinations(&self.games)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CheckRangeResponse {
    pub summaries: Vec<DrawSummary>,
    pub statistics: CheckStatistics,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ManualCheckResponse {
    pub results: Vec<ScoredCombination>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_request_validation() {
        let ok: ManualCheckRequest = serde_json::from_str(
            r#"{"games": [[1,2,3,4,5,6,7,8,9,10,11,12,13,14,15]],
                "drawn": [1,2,3,4,5,6,7,8,9,10,11,12,13,14,16]}"#,
        )
        .unwrap();
        assert!(ok.validate().is_ok());
        assert_eq!(ok.combinations().unwrap().len(), 1);

        let short_draw: ManualCheckRequest = serde_json::from_str(
            r#"{"games": [[1,2,3,4,5,6,7,8,9,10,11,12,13,14,15]], "drawn": [1,2,3]}"#,
        )
        .unwrap();
        assert!(short_draw.validate().is_err());
    }

    #[test]
    fn test_range_request_validation() {
        let no_games: CheckRangeRequest = serde_json::from_str(
            r#"{"games": [], "start_date": "2025-01-01", "end_date": "2025-01-31"}"#,
        )
        .unwrap();
        assert!(no_games.validate().is_err());

        let bad_game: CheckRangeRequest = serde_json::from_str(
            r#"{"games": [[1,2,3]], "start_date": "2025-01-01", "end_date": "2025-01-31"}"#,
        )
        .unwrap();
        let errors = bad_game.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("games"));
    }
}
