use std::collections::BTreeSet;

use super::is_valid_number;
use crate::error::{EngineError, Result};

/// Numbers the user wants in every generated game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedNumbers(BTreeSet<u8>);

impl FixedNumbers {
    pub fn new(numbers: impl IntoIterator<Item = u8>) -> Result<Self> {
        let mut set = BTreeSet::new();
        for number in numbers {
            if !is_valid_number(number) {
                return Err(EngineError::NumberOutOfRange(number));
            }
            set.insert(number);
        }
        Ok(Self(set))
    }

    /// Parses a comma separated list such as `"1, 5,13"`. Blank input means no fixed numbers.
    pub fn parse(input: &str) -> Result<Self> {
        let numbers = input
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<u8>()
                    .map_err(|_| EngineError::InvalidNumber(s.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(numbers)
    }

    /// Rejects a fixed set that cannot fit in a game of `size` numbers.
    pub fn ensure_fits(&self, size: usize) -> Result<()> {
        if self.len() > size {
            return Err(EngineError::TooManyFixed {
                fixed: self.len(),
                size,
            });
        }
        Ok(())
    }

    pub fn contains(&self, number: u8) -> bool {
        self.0.contains(&number)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().copied()
    }
}
