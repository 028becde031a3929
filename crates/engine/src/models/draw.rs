use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{DRAW_SIZE, sorted_distinct};
use crate::error::{EngineError, Result};

/// Official prize tier as published by the archive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PrizeTier {
    /// 1 pays 15 hits, 2 pays 14 hits, and so on.
    pub tier: Option<u32>,
    pub description: Option<String>,
    pub winners: Option<u64>,
    pub payout: Decimal,
}

/// One drawing event with its winning numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Draw {
    pub sequence: u32,
    pub date: NaiveDate,
    pub numbers: Vec<u8>,
    #[serde(default)]
    pub prize_tiers: Vec<PrizeTier>,
    /// Set when the draw was generated locally because the archive was unreachable.
    #[serde(default)]
    pub is_synthetic: bool,
}

impl Draw {
    pub fn new(
        sequence: u32,
        date: NaiveDate,
        numbers: impl IntoIterator<Item = u8>,
        prize_tiers: Vec<PrizeTier>,
    ) -> Result<Self> {
        let numbers = sorted_distinct(numbers)?;
        if numbers.len() != DRAW_SIZE {
            return Err(EngineError::InvalidDrawSize(numbers.len()));
        }

        Ok(Self {
            sequence,
            date,
            numbers,
            prize_tiers,
            is_synthetic: false,
        })
    }

    pub fn synthetic(
        sequence: u32,
        date: NaiveDate,
        numbers: impl IntoIterator<Item = u8>,
    ) -> Result<Self> {
        let mut draw = Self::new(sequence, date, numbers, Vec::new())?;
        draw.is_synthetic = true;
        Ok(draw)
    }

    pub fn prize_table(&self) -> Option<&[PrizeTier]> {
        if self.prize_tiers.is_empty() {
            None
        } else {
            Some(&self.prize_tiers)
        }
    }
}
