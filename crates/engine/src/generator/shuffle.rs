use rand::Rng;
use rand::seq::SliceRandom;

/// Uniform Fisher-Yates permutation.
pub fn shuffled<R: Rng + ?Sized>(mut values: Vec<u8>, rng: &mut R) -> Vec<u8> {
    values.shuffle(rng);
    values
}

/// Shuffles and keeps the first `count` values, or all of them if there are fewer.
pub fn take_shuffled<R: Rng + ?Sized>(values: Vec<u8>, count: usize, rng: &mut R) -> Vec<u8> {
    let mut values = shuffled(values, rng);
    values.truncate(count);
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_shuffled_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut values = shuffled((1..=25).collect(), &mut rng);
        values.sort_unstable();
        assert_eq!(values, (1..=25).collect::<Vec<u8>>());
    }

    #[test]
    fn test_take_shuffled_caps_at_len() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(take_shuffled(vec![1, 2, 3], 10, &mut rng).len(), 3);
        assert_eq!(take_shuffled((1..=25).collect(), 4, &mut rng).len(), 4);
        assert!(take_shuffled(Vec::new(), 4, &mut rng).is_empty());
    }
}
