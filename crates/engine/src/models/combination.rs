use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

use super::{MAX_GAME_SIZE, MIN_GAME_SIZE, format_numbers, sorted_distinct};
use crate::error::{EngineError, Result};

/// A single lottery entry: 15 to 20 distinct numbers in 1..=25, kept ascending.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
#[schema(value_type = Vec<u8>, example = json!([1, 2, 3, 5, 8, 10, 11, 13, 14, 16, 18, 20, 21, 23, 25]))]
pub struct Combination(Vec<u8>);

impl Combination {
    pub fn new(numbers: impl IntoIterator<Item = u8>) -> Result<Self> {
        let numbers = sorted_distinct(numbers)?;
        if !(MIN_GAME_SIZE..=MAX_GAME_SIZE).contains(&numbers.len()) {
            return Err(EngineError::InvalidSize(numbers.len()));
        }
        Ok(Self(numbers))
    }

    /// Wraps numbers the generator already built sorted and distinct.
    pub(crate) fn from_sorted(numbers: Vec<u8>) -> Self {
        debug_assert!(numbers.windows(2).all(|w| w[0] < w[1]));
        Self(numbers)
    }

    pub fn numbers(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, number: u8) -> bool {
        self.0.binary_search(&number).is_ok()
    }
}

impl TryFrom<Vec<u8>> for Combination {
    type Error = EngineError;

    fn try_from(value: Vec<u8>) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Combination> for Vec<u8> {
    fn from(value: Combination) -> Self {
        value.0
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", format_numbers(&self.0))
    }
}
