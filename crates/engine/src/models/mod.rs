mod combination;
mod draw;
mod fixed_numbers;
mod strategy;

pub use combination::Combination;
pub use draw::{Draw, PrizeTier};
pub use fixed_numbers::FixedNumbers;
pub use strategy::Strategy;

use crate::error::{EngineError, Result};

pub const MIN_NUMBER: u8 = 1;
pub const MAX_NUMBER: u8 = 25;

/// Numbers drawn in every contest.
pub const DRAW_SIZE: usize = 15;

pub const MIN_GAME_SIZE: usize = 15;
pub const MAX_GAME_SIZE: usize = 20;

pub fn is_valid_number(number: u8) -> bool {
    (MIN_NUMBER..=MAX_NUMBER).contains(&number)
}

/// Checks range and uniqueness, returning the numbers in ascending order.
pub(crate) fn sorted_distinct(numbers: impl IntoIterator<Item = u8>) -> Result<Vec<u8>> {
    let mut numbers: Vec<u8> = numbers.into_iter().collect();
    numbers.sort_unstable();

    for (idx, &number) in numbers.iter().enumerate() {
        if !is_valid_number(number) {
            return Err(EngineError::NumberOutOfRange(number));
        }
        if idx > 0 && numbers[idx - 1] == number {
            return Err(EngineError::DuplicateNumber(number));
        }
    }

    Ok(numbers)
}

/// Formats numbers the way tickets show them: zero padded, comma separated.
pub fn format_numbers(numbers: &[u8]) -> String {
    numbers
        .iter()
        .map(|n| format!("{:02}", n))
        .collect::<Vec<_>>()
        .join(", ")
}
