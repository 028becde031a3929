use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Combination, Draw, PrizeTier};

/// A combination checked against one draw. Recomputed on demand, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScoredCombination {
    pub combination: Combination,
    pub hits: usize,
    pub payout: Decimal,
}

/// Number of combination numbers present in the drawn set.
pub fn count_hits(combination: &[u8], drawn: &[u8]) -> usize {
    combination.iter().filter(|n| drawn.contains(n)).count()
}

/// Fixed payouts for 11 to 13 hits.
pub fn fixed_prize(hits: usize) -> Option<Decimal> {
    match hits {
        11 => Some(Decimal::new(700, 2)),
        12 => Some(Decimal::new(1400, 2)),
        13 => Some(Decimal::new(3500, 2)),
        _ => None,
    }
}

/// Payout for `hits`. 14 and 15 hits are only paid from the official table; without
/// a matching entry they are worth zero.
///
/// `combination_size` does not change the amount.
pub fn prize_for(hits: usize, _combination_size: usize, prize_table: Option<&[PrizeTier]>) -> Decimal {
    if let Some(amount) = fixed_prize(hits) {
        return amount;
    }

    match hits {
        14 | 15 => prize_table
            .and_then(|table| official_prize(hits, table))
            .unwrap_or(Decimal::ZERO),
        _ => Decimal::ZERO,
    }
}

/// Looks up the 14/15 hit tier: tier 1 pays 15 hits, tier 2 pays 14, or any tier whose
/// description mentions the hit count. First match wins.
fn official_prize(hits: usize, table: &[PrizeTier]) -> Option<Decimal> {
    let tier = if hits == 15 { 1 } else { 2 };
    let hits_text = hits.to_string();

    table
        .iter()
        .find(|p| {
            p.tier == Some(tier)
                || p
                    .description
                    .as_deref()
                    .is_some_and(|d| d.contains(&hits_text))
        })
        .map(|p| p.payout.max(Decimal::ZERO))
}

/// Scores against a bare set of drawn numbers and an optional prize table.
pub fn score_against(
    combination: &Combination,
    drawn: &[u8],
    prize_table: Option<&[PrizeTier]>,
) -> ScoredCombination {
    let hits = count_hits(combination.numbers(), drawn);
    ScoredCombination {
        combination: combination.clone(),
        hits,
        payout: prize_for(hits, combination.len(), prize_table),
    }
}

/// Scores against a draw, using its own prize table.
pub fn score(combination: &Combination, draw: &Draw) -> ScoredCombination {
    score_against(combination, &draw.numbers, draw.prize_table())
}
