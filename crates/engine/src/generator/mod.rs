mod pool;
mod shuffle;

pub use pool::NumberPool;
pub use shuffle::{shuffled, take_shuffled};

use rand::Rng;

use crate::models::{Combination, FixedNumbers, Strategy};

/// Numbers that historically come up most often, in priority order.
pub const FREQUENT_NUMBERS: [u8; 15] = [5, 10, 13, 20, 24, 2, 8, 15, 18, 22, 3, 7, 11, 16, 25];

/// Inclusive bands used by the quadrant strategy.
pub const QUADRANTS: [(u8, u8); 4] = [(1, 6), (7, 12), (13, 18), (19, 25)];

/// Generates one game of `size` numbers containing every fixed number.
///
/// The caller must ensure `fixed.len() <= size`; see [`FixedNumbers::ensure_fits`].
pub fn generate(size: usize, fixed: &FixedNumbers, strategy: Strategy) -> Combination {
    generate_with_rng(size, fixed, strategy, &mut rand::rng())
}

/// Same as [`generate`], drawing from `rng` so callers can seed it.
pub fn generate_with_rng<R: Rng + ?Sized>(
    size: usize,
    fixed: &FixedNumbers,
    strategy: Strategy,
    rng: &mut R,
) -> Combination {
    let pool = NumberPool::excluding(fixed);
    let need = size.saturating_sub(fixed.len());

    let mut picked = match strategy {
        Strategy::Random => take_shuffled(pool.numbers().to_vec(), need, rng),
        Strategy::EvenOddBalanced => pick_even_odd(&pool, need, rng),
        Strategy::QuadrantDistributed => pick_quadrants(&pool, need, rng),
        Strategy::FrequencyWeighted => pick_frequent(&pool, need, rng),
    };
    top_up(&mut picked, &pool, need, rng);

    let mut numbers: Vec<u8> = fixed.iter().chain(picked).collect();
    numbers.sort_unstable();

    Combination::from_sorted(numbers)
}

fn pick_even_odd<R: Rng + ?Sized>(pool: &NumberPool, need: usize, rng: &mut R) -> Vec<u8> {
    let evens_needed = need / 2;
    let odds_needed = need - evens_needed;

    let mut picked = take_shuffled(pool.select(|n| n % 2 == 0), evens_needed, rng);
    picked.extend(take_shuffled(pool.select(|n| n % 2 == 1), odds_needed, rng));
    picked
}

fn pick_quadrants<R: Rng + ?Sized>(pool: &NumberPool, need: usize, rng: &mut R) -> Vec<u8> {
    let per_quadrant = need / QUADRANTS.len();

    QUADRANTS
        .iter()
        .flat_map(|&(low, high)| take_shuffled(pool.band(low, high), per_quadrant, rng))
        .collect()
}

fn pick_frequent<R: Rng + ?Sized>(pool: &NumberPool, need: usize, rng: &mut R) -> Vec<u8> {
    let frequent: Vec<u8> = FREQUENT_NUMBERS
        .iter()
        .copied()
        .filter(|n| pool.numbers().contains(n))
        .collect();
    // floor(need * 0.7)
    let from_frequent = frequent.len().min(need * 7 / 10);

    let mut picked = take_shuffled(frequent, from_frequent, rng);
    let rest = take_shuffled(pool.unused(&picked), need - picked.len(), rng);
    picked.extend(rest);
    picked
}

/// Fills whatever the partitions could not provide from the unused part of the pool.
fn top_up<R: Rng + ?Sized>(picked: &mut Vec<u8>, pool: &NumberPool, need: usize, rng: &mut R) {
    if picked.len() >= need {
        return;
    }
    let missing = need - picked.len();
    let extra = take_shuffled(pool.unused(picked), missing, rng);
    picked.extend(extra);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::rstest;
    use std::collections::HashSet;

    fn assert_valid(combination: &Combination, size: usize, fixed: &FixedNumbers) {
        let numbers = combination.numbers();
        assert_eq!(numbers.len(), size);
        assert!(numbers.windows(2).all(|w| w[0] < w[1]), "{:?}", numbers);
        assert!(numbers.iter().all(|n| (1..=25).contains(n)));
        assert!(fixed.iter().all(|n| combination.contains(n)));
    }

    #[rstest]
    fn test_generate_always_valid(
        #[values(
            Strategy::Random,
            Strategy::EvenOddBalanced,
            Strategy::QuadrantDistributed,
            Strategy::FrequencyWeighted
        )]
        strategy: Strategy,
        #[values(15, 16, 17, 18, 19, 20)] size: usize,
        #[values("", "1,2,3", "2,4,6,8,10,12,14,16,18,20,22,24", "5,10,13,20,24,2,8,15,18,22,3,7,11,16,25")]
        fixed: &str,
    ) {
        let fixed = FixedNumbers::parse(fixed).unwrap();
        let mut rng = StdRng::seed_from_u64(size as u64);

        for _ in 0..50 {
            let combination = generate_with_rng(size, &fixed, strategy, &mut rng);
            assert_valid(&combination, size, &fixed);
        }
    }

    #[rstest]
    #[case(Strategy::Random)]
    #[case(Strategy::EvenOddBalanced)]
    #[case(Strategy::QuadrantDistributed)]
    #[case(Strategy::FrequencyWeighted)]
    fn test_generate_varies_between_calls(#[case] strategy: Strategy) {
        let fixed = FixedNumbers::default();
        let distinct: HashSet<Combination> = (0..20)
            .map(|_| generate(15, &fixed, strategy))
            .collect();

        assert!(distinct.len() > 1);
    }

    #[test]
    fn test_random_keeps_fixed_numbers() {
        let fixed = FixedNumbers::new([1, 2, 3]).unwrap();

        for _ in 0..100 {
            let combination = generate(15, &fixed, Strategy::Random);
            assert_eq!(&combination.numbers()[..3], &[1, 2, 3]);
            assert!(combination.numbers()[3..].iter().all(|n| (4..=25).contains(n)));
            assert_eq!(combination.len(), 15);
        }
    }

    #[test]
    fn test_even_odd_split() {
        let mut rng = StdRng::seed_from_u64(42);
        let fixed = FixedNumbers::default();

        for size in 15..=20 {
            let combination =
                generate_with_rng(size, &fixed, Strategy::EvenOddBalanced, &mut rng);
            let evens = combination.numbers().iter().filter(|n| *n % 2 == 0).count();
            assert_eq!(evens, size / 2);
            assert_eq!(combination.len() - evens, size - size / 2);
        }
    }

    #[test]
    fn test_even_odd_shortfall_is_filled() {
        // 13 odds exist; fixing 10 of them leaves 3 for the 8 odd slots.
        let fixed = FixedNumbers::new([1, 3, 5, 7, 9, 11, 13, 15, 17, 19]).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        let combination = generate_with_rng(20, &fixed, Strategy::EvenOddBalanced, &mut rng);
        assert_valid(&combination, 20, &fixed);
    }

    #[test]
    fn test_quadrants_cover_every_band() {
        let mut rng = StdRng::seed_from_u64(3);
        let fixed = FixedNumbers::default();

        for _ in 0..50 {
            let combination =
                generate_with_rng(16, &fixed, Strategy::QuadrantDistributed, &mut rng);
            for (low, high) in QUADRANTS {
                let in_band = combination
                    .numbers()
                    .iter()
                    .filter(|n| (low..=high).contains(*n))
                    .count();
                assert!(in_band >= 4, "band {}-{} has {}", low, high, in_band);
            }
        }
    }

    #[test]
    fn test_frequency_weighted_prefers_frequent_numbers() {
        let mut rng = StdRng::seed_from_u64(9);
        let fixed = FixedNumbers::default();

        for _ in 0..50 {
            let combination =
                generate_with_rng(15, &fixed, Strategy::FrequencyWeighted, &mut rng);
            let frequent = combination
                .numbers()
                .iter()
                .filter(|n| FREQUENT_NUMBERS.contains(*n))
                .count();
            // 10 come from the frequent list; the other 5 may land there too
            assert!(frequent >= 10);
        }
    }

    #[test]
    fn test_fixed_fills_whole_game() {
        let fixed = FixedNumbers::new(6..=20).unwrap();
        let combination = generate(15, &fixed, Strategy::QuadrantDistributed);
        assert_eq!(combination.numbers(), (6..=20).collect::<Vec<u8>>().as_slice());
    }
}
