// `RandomSource` backed by the thread-local RNG from `rand`.

use crate::core::responder::RandomSource;
use rand::Rng;

pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn roll(&self, low: u32, high: u32) -> u32 {
        rand::thread_rng().gen_range(low..=high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rolls_stay_inside_the_inclusive_range() {
        let rng = ThreadRngSource;

        for _ in 0..10_000 {
            let value = rng.roll(1, 2000);
            assert!((1..=2000).contains(&value));
        }

        assert_eq!(rng.roll(5, 5), 5);
    }
}
