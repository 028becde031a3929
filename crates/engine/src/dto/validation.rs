use std::borrow::Cow;
use std::collections::HashSet;
use validator::ValidationError;

use crate::models::{Combination, DRAW_SIZE, is_valid_number};

fn error(code: &'static str, message: String) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Owned(message));
    error
}

pub fn validate_numbers(numbers: &[u8]) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for &number in numbers {
        if !is_valid_number(number) {
            return Err(error(
                "number_range",
                format!("Number {} is outside 1-25", number),
            ));
        }
        if !seen.insert(number) {
            return Err(error("duplicate", format!("Number {} is repeated", number)));
        }
    }
    Ok(())
}

pub fn validate_drawn(numbers: &[u8]) -> Result<(), ValidationError> {
    if numbers.len() != DRAW_SIZE {
        return Err(error(
            "draw_size",
            format!("A draw has exactly 15 numbers, got {}", numbers.len()),
        ));
    }
    validate_numbers(numbers)
}

pub fn validate_games(games: &[Vec<u8>]) -> Result<(), ValidationError> {
    for (idx, game) in games.iter().enumerate() {
        if let Err(e) = Combination::new(game.iter().copied()) {
            return Err(error("game", format!("Game {}: {}", idx + 1, e)));
        }
    }
    Ok(())
}
