use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::validation::validate_numbers;
use crate::error::Result;
use crate::models::{Combination, FixedNumbers, Strategy};

/// Request payload for generating a batch of games
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_fixed_fits", skip_on_field_errors = true))]
pub struct GenerateGamesRequest {
    #[serde(default = "default_quantity")]
    #[validate(range(min = 1, max = 100, message = "Quantity must be between 1 and 100"))]
    pub quantity: u32,

    #[serde(default = "default_size")]
    #[validate(range(min = 15, max = 20, message = "Game size must be between 15 and 20"))]
    pub size: usize,

    #[serde(default)]
    #[validate(custom(function = "validate_numbers"))]
    pub fixed: Vec<u8>,

    /// Unknown names fall back to `random`.
    #[serde(default)]
    #[schema(value_type = String, example = "even-odd-balanced")]
    pub strategy: Strategy,
}

fn default_quantity() -> u32 {
    10
}

fn default_size() -> usize {
    15
}

fn validate_fixed_fits(request: &GenerateGamesRequest) -> std::result::Result<(), ValidationError> {
    if request.fixed.len() > request.size {
        let mut error = ValidationError::new("too_many_fixed");
        error.message = Some(
            format!(
                "{} fixed numbers chosen but the game only has {}",
                request.fixed.len(),
                request.size
            )
            .into(),
        );
        return Err(error);
    }
    Ok(())
}

impl GenerateGamesRequest {
    pub fn fixed_numbers(&self) -> Result<FixedNumbers> {
        FixedNumbers::new(self.fixed.iter().copied())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GeneratedGame {
    pub id: Uuid,
    pub numbers: Combination,
    pub strategy: String,
    pub created_at: DateTime<Utc>,
}

impl GeneratedGame {
    pub fn new(numbers: Combination, strategy: Strategy) -> Self {
        Self {
            id: Uuid::new_v4(),
            numbers,
            strategy: strategy.to_string(),
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenerateGamesResponse {
    pub games: Vec<GeneratedGame>,
}
