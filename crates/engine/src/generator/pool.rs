use crate::models::{FixedNumbers, MAX_NUMBER, MIN_NUMBER};

/// The numbers still available to the generator, ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberPool {
    numbers: Vec<u8>,
}

impl NumberPool {
    pub fn full() -> Self {
        Self {
            numbers: (MIN_NUMBER..=MAX_NUMBER).collect(),
        }
    }

    pub fn excluding(fixed: &FixedNumbers) -> Self {
        Self {
            numbers: (MIN_NUMBER..=MAX_NUMBER)
                .filter(|n| !fixed.contains(*n))
                .collect(),
        }
    }

    pub fn numbers(&self) -> &[u8] {
        &self.numbers
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    pub fn select(&self, predicate: impl Fn(u8) -> bool) -> Vec<u8> {
        self.numbers.iter().copied().filter(|n| predicate(*n)).collect()
    }

    /// Pool numbers within `low..=high`.
    pub fn band(&self, low: u8, high: u8) -> Vec<u8> {
        self.select(|n| (low..=high).contains(&n))
    }

    /// Pool numbers not already in `taken`.
    pub fn unused(&self, taken: &[u8]) -> Vec<u8> {
        self.select(|n| !taken.contains(&n))
    }
}
