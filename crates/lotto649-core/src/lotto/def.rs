use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Lowest playable number.
pub const NUMBER_MIN: u8 = 1;
/// Highest playable number.
pub const NUMBER_MAX: u8 = 49;
/// Numbers drawn per combination.
pub const COMBINATION_SIZE: usize = 6;

/// A played combination: 6 distinct numbers in 1-49, sorted ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combination {
    pub numbers: [u8; COMBINATION_SIZE],
}

impl Display for Combination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            self.numbers
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombinationError {
    InvalidNumberCount(usize),
    NumberOutOfRange(u8),
    DuplicateNumber,
}

impl Display for CombinationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidNumberCount(count) => {
                write!(
                    f,
                    "Invalid number of values: expected {COMBINATION_SIZE}, got {count}"
                )
            }
            Self::NumberOutOfRange(number) => {
                write!(
                    f,
                    "Number {number} is out of range ({NUMBER_MIN}-{NUMBER_MAX})"
                )
            }
            Self::DuplicateNumber => write!(f, "Duplicate numbers found"),
        }
    }
}

impl std::error::Error for CombinationError {}

impl Combination {
    pub fn new(numbers: impl AsMut<[u8]>) -> anyhow::Result<Self, CombinationError> {
        Self::check(numbers)
    }

    fn check(mut numbers: impl AsMut<[u8]>) -> anyhow::Result<Self, CombinationError> {
        let numbers = numbers.as_mut();
        if numbers.len() != COMBINATION_SIZE {
            return Err(CombinationError::InvalidNumberCount(numbers.len()));
        }

        for &number in numbers.iter() {
            if number < NUMBER_MIN || number > NUMBER_MAX {
                return Err(CombinationError::NumberOutOfRange(number));
            }
        }

        numbers.sort_unstable();
        if numbers.windows(2).any(|w| w[0] == w[1]) {
            return Err(CombinationError::DuplicateNumber);
        }

        let numbers: [u8; COMBINATION_SIZE] = numbers
            .try_into()
            .map_err(|_e| CombinationError::InvalidNumberCount(COMBINATION_SIZE))?;

        Ok(Self { numbers })
    }

    pub fn contains(&self, number: u8) -> bool {
        self.numbers.contains(&number)
    }
}
