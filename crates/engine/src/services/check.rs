use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

use crate::models::{Combination, Draw};
use crate::scoring::{ScoredCombination, score, score_against};

/// Lowest hit count that pays a prize.
pub const MIN_PRIZE_HITS: usize = 11;

/// Every combination checked against one draw, best results first.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DrawSummary {
    pub sequence: u32,
    pub date: NaiveDate,
    pub drawn: Vec<u8>,
    pub is_synthetic: bool,
    pub results: Vec<ScoredCombination>,
    pub total_payout: Decimal,
    pub winning_count: usize,
    pub best_hits: usize,
}

/// Totals across several draw summaries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CheckStatistics {
    pub combinations_checked: usize,
    pub winning_combinations: usize,
    pub total_payout: Decimal,
    /// Hit count (11..=15) to number of combinations reaching it.
    pub hit_distribution: BTreeMap<usize, usize>,
}

pub fn summarize_draw(combinations: &[Combination], draw: &Draw) -> DrawSummary {
    let mut results: Vec<ScoredCombination> =
        combinations.iter().map(|c| score(c, draw)).collect();
    sort_results(&mut results);

    DrawSummary {
        sequence: draw.sequence,
        date: draw.date,
        drawn: draw.numbers.clone(),
        is_synthetic: draw.is_synthetic,
        total_payout: results.iter().map(|r| r.payout).sum(),
        winning_count: results.iter().filter(|r| r.payout > Decimal::ZERO).count(),
        best_hits: results.iter().map(|r| r.hits).max().unwrap_or(0),
        results,
    }
}

/// Summaries in the order the draws were given.
pub fn summarize_draws(combinations: &[Combination], draws: &[Draw]) -> Vec<DrawSummary> {
    draws
        .iter()
        .map(|draw| summarize_draw(combinations, draw))
        .collect()
}

/// Checks against numbers typed in by hand. No prize table is available, so
/// 14 and 15 hits pay nothing.
pub fn check_manual(combinations: &[Combination], drawn: &[u8]) -> Vec<ScoredCombination> {
    let mut results: Vec<ScoredCombination> = combinations
        .iter()
        .map(|c| score_against(c, drawn, None))
        .collect();
    sort_results(&mut results);
    results
}

pub fn statistics(summaries: &[DrawSummary]) -> CheckStatistics {
    let mut stats = CheckStatistics {
        hit_distribution: (MIN_PRIZE_HITS..=15).map(|hits| (hits, 0)).collect(),
        ..Default::default()
    };

    for summary in summaries {
        stats.combinations_checked += summary.results.len();
        stats.winning_combinations += summary.winning_count;
        stats.total_payout += summary.total_payout;

        for result in &summary.results {
            if let Some(count) = stats.hit_distribution.get_mut(&result.hits) {
                *count += 1;
            }
        }
    }

    stats
}

fn sort_results(results: &mut [ScoredCombination]) {
    results.sort_by(|a, b| b.hits.cmp(&a.hits).then(b.payout.cmp(&a.payout)));
}
