use super::check::MatchResult;
use super::def::Combination;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Fewest combinations a ticket may hold.
pub const MIN_COMBINATIONS: usize = 10;
/// Most combinations a ticket may hold.
pub const MAX_COMBINATIONS: usize = 200;

/// A batch of played combinations sharing one complementary number.
///
/// The complementary number is drawn first and excluded from every
/// member combination's candidate pool. Read-only after generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub combinations: Vec<Combination>,
    pub complementary: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicketError {
    CombinationCountOutOfRange(usize),
}

impl Display for TicketError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CombinationCountOutOfRange(count) => {
                write!(
                    f,
                    "Combination count {count} is out of range ({MIN_COMBINATIONS}-{MAX_COMBINATIONS})"
                )
            }
        }
    }
}

impl std::error::Error for TicketError {}

impl Ticket {
    /// Generate a ticket of `count` combinations.
    ///
    /// The caller validates `count` at the input boundary; an
    /// out-of-range value here is a contract violation and fails fast
    /// instead of clamping.
    pub fn generate<R: Rng + ?Sized>(
        count: usize,
        rng: &mut R,
    ) -> anyhow::Result<Self, TicketError> {
        if count < MIN_COMBINATIONS || count > MAX_COMBINATIONS {
            return Err(TicketError::CombinationCountOutOfRange(count));
        }

        let complementary = Combination::generate_complementary(rng);
        let combinations = (0..count)
            .map(|_| Combination::generate(rng, complementary))
            .collect();

        log::debug!("generated ticket of {count} combinations, complementary {complementary}");
        Ok(Self {
            combinations,
            complementary,
        })
    }

    /// Score one member combination against the winning combination.
    pub fn check(&self, combination: &Combination, winning: &Combination) -> MatchResult {
        combination.check_against(winning, self.complementary)
    }

    /// Member combinations that win against `winning`, in ticket order.
    pub fn winning_combinations(&self, winning: &Combination) -> Vec<Combination> {
        self.combinations
            .iter()
            .filter(|combination| self.check(combination, winning).is_winning())
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng as _;
    use rand::rngs::StdRng;

    fn create_combination(numbers: [u8; 6]) -> Combination {
        Combination::new(numbers).unwrap()
    }

    #[test]
    fn test_generate_count_bounds() {
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(
            Ticket::generate(9, &mut rng),
            Err(TicketError::CombinationCountOutOfRange(9))
        );
        assert_eq!(
            Ticket::generate(201, &mut rng),
            Err(TicketError::CombinationCountOutOfRange(201))
        );
        assert!(Ticket::generate(MIN_COMBINATIONS, &mut rng).is_ok());
        assert!(Ticket::generate(MAX_COMBINATIONS, &mut rng).is_ok());
    }

    #[test]
    fn test_generate_exact_count() {
        let mut rng = StdRng::seed_from_u64(2);
        for count in [10, 57, 200] {
            let ticket = Ticket::generate(count, &mut rng).unwrap();
            assert_eq!(ticket.combinations.len(), count);
        }
    }

    #[test]
    fn test_no_combination_contains_complementary() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let ticket = Ticket::generate(50, &mut rng).unwrap();
            for combination in &ticket.combinations {
                assert!(!combination.contains(ticket.complementary));
            }
        }
    }

    #[test]
    fn test_winning_combinations_rule() {
        let ticket = Ticket {
            combinations: vec![
                create_combination([1, 2, 3, 4, 5, 6]),    // 3 matches
                create_combination([1, 2, 10, 11, 12, 13]), // 2 matches
                create_combination([1, 10, 11, 12, 13, 14]), // 1 match
                create_combination([10, 11, 12, 13, 14, 15]), // 0 matches
            ],
            complementary: 40,
        };
        let winning = create_combination([1, 2, 3, 7, 8, 9]);

        let winners = ticket.winning_combinations(&winning);
        assert_eq!(
            winners,
            vec![
                create_combination([1, 2, 3, 4, 5, 6]),
                create_combination([1, 2, 10, 11, 12, 13]),
            ]
        );
    }

    #[test]
    fn test_single_match_with_complementary_wins() {
        // Cannot happen with generated tickets; built by hand to keep
        // the rule itself covered.
        let ticket = Ticket {
            combinations: vec![create_combination([1, 10, 11, 12, 13, 40])],
            complementary: 40,
        };
        let winning = create_combination([1, 2, 3, 7, 8, 9]);

        let winners = ticket.winning_combinations(&winning);
        assert_eq!(winners.len(), 1);
    }

    #[test]
    fn test_generated_winners_always_have_two_matches() {
        // Regression: the generator excludes the complementary number
        // from every pool, so the complementary arm of the winner rule
        // must never be the reason a generated combination wins.
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let ticket = Ticket::generate(100, &mut rng).unwrap();
            let winning = Combination::generate(&mut rng, ticket.complementary);

            for winner in ticket.winning_combinations(&winning) {
                let result = ticket.check(&winner, &winning);
                assert!(result.matches >= 2);
                assert!(!result.complementary);
            }
        }
    }

    #[test]
    fn test_winning_combinations_is_subset_in_order() {
        let mut rng = StdRng::seed_from_u64(11);
        let ticket = Ticket::generate(150, &mut rng).unwrap();
        let winning = Combination::generate(&mut rng, ticket.complementary);

        let winners = ticket.winning_combinations(&winning);
        let mut position = 0;
        for combination in &ticket.combinations {
            if winners.get(position) == Some(combination) {
                position += 1;
            }
        }
        assert_eq!(position, winners.len());
    }
}
