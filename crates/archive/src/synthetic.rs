use chrono::{Local, NaiveDate};
use engine::Draw;
use engine::generator::{NumberPool, take_shuffled};
use engine::models::DRAW_SIZE;
use rand::Rng;

use crate::range::DateRangeQuery;

/// Contest number given to synthetic draws when none is known.
pub const PLACEHOLDER_SEQUENCE: u32 = 3000;

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// A locally drawn stand-in: 15 distinct numbers chosen uniformly.
pub fn synthetic_draw<R: Rng + ?Sized>(
    sequence: Option<u32>,
    date: NaiveDate,
    rng: &mut R,
) -> Draw {
    let mut numbers = take_shuffled(NumberPool::full().numbers().to_vec(), DRAW_SIZE, rng);
    numbers.sort_unstable();

    Draw {
        sequence: sequence.unwrap_or(PLACEHOLDER_SEQUENCE),
        date,
        numbers,
        prize_tiers: Vec::new(),
        is_synthetic: true,
    }
}

/// One synthetic draw per day of the range, newest first, each day left out with
/// probability `omit_probability`. Only the newest `max_days` days are considered.
pub fn synthetic_range<R: Rng + ?Sized>(
    query: &DateRangeQuery,
    omit_probability: f64,
    max_days: usize,
    rng: &mut R,
) -> Vec<Draw> {
    let keep_probability = (1.0 - omit_probability).clamp(0.0, 1.0);
    let mut sequence = PLACEHOLDER_SEQUENCE;

    query
        .days_newest_first()
        .take(max_days)
        .filter_map(|day| {
            if !rng.random_bool(keep_probability) {
                return None;
            }
            let draw = synthetic_draw(Some(sequence), day, rng);
            sequence = sequence.saturating_sub(1).max(1);
            Some(draw)
        })
        .collect()
}
