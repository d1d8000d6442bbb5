use super::def::{COMBINATION_SIZE, Combination, NUMBER_MAX, NUMBER_MIN};
use rand::Rng;

impl Combination {
    /// Draw a combination from the pool 1-49 minus `excluded`.
    ///
    /// Shrinking-pool draw: the full candidate list is built once, then
    /// each pick removes a uniformly random entry, so every remaining
    /// candidate is equally likely at each step. The result is a uniform
    /// random 6-subset of the 48 candidates, sorted ascending.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, excluded: u8) -> Self {
        let mut pool: Vec<u8> = (NUMBER_MIN..=NUMBER_MAX)
            .filter(|&n| n != excluded)
            .collect();

        let mut numbers = [0u8; COMBINATION_SIZE];
        for slot in &mut numbers {
            let index = rng.gen_range(0..pool.len());
            *slot = pool.remove(index);
        }
        numbers.sort_unstable();

        Self { numbers }
    }

    /// Draw a complementary number, uniform in 1-49.
    pub fn generate_complementary<R: Rng + ?Sized>(rng: &mut R) -> u8 {
        rng.gen_range(NUMBER_MIN..=NUMBER_MAX)
    }
}
