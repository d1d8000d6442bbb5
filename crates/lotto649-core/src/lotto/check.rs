use super::def::Combination;
use std::fmt::Display;

/// Outcome of scoring one played combination against the draw.
///
/// Derived on demand, never stored on the ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    /// Size of the intersection with the winning combination (0-6).
    pub matches: usize,
    /// The ticket's complementary number appears among the combination's
    /// own 6 numbers. Unreachable under the current generator, which
    /// excludes the complementary number from every candidate pool, but
    /// the winner rule keeps the arm in case generation rules change.
    pub complementary: bool,
}

impl MatchResult {
    /// A combination wins with at least 2 matches, or a single match
    /// backed by the complementary number.
    pub fn is_winning(&self) -> bool {
        self.matches >= 2 || (self.matches == 1 && self.complementary)
    }
}

impl Combination {
    /// Score this combination against the winning one.
    ///
    /// # Parameters
    /// * `winning` - The drawn winning combination
    /// * `complementary` - The ticket's complementary number
    pub fn check_against(&self, winning: &Self, complementary: u8) -> MatchResult {
        let matches = self
            .numbers
            .iter()
            .filter(|&n| winning.numbers.contains(n))
            .count();

        MatchResult {
            matches,
            complementary: self.contains(complementary),
        }
    }
}

/// Prize tier of a single combination. The nine tiers are mutually
/// exclusive and cover every match count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    ZeroOfSix,
    OneOfSix,
    TwoOfSix,
    TwoOfSixComplementary,
    ThreeOfSix,
    FourOfSix,
    FiveOfSix,
    FiveOfSixComplementary,
    SixOfSix,
}

impl Category {
    /// All tiers, in lexicographic order of their labels. Reports list
    /// tiers in exactly this order.
    pub const ALL: [Self; 9] = [
        Self::ZeroOfSix,
        Self::OneOfSix,
        Self::TwoOfSix,
        Self::TwoOfSixComplementary,
        Self::ThreeOfSix,
        Self::FourOfSix,
        Self::FiveOfSix,
        Self::FiveOfSixComplementary,
        Self::SixOfSix,
    ];

    pub fn from_result(result: MatchResult) -> Self {
        match (result.matches, result.complementary) {
            (0, _) => Self::ZeroOfSix,
            (1, _) => Self::OneOfSix,
            (2, false) => Self::TwoOfSix,
            (2, true) => Self::TwoOfSixComplementary,
            (3, _) => Self::ThreeOfSix,
            (4, _) => Self::FourOfSix,
            (5, false) => Self::FiveOfSix,
            (5, true) => Self::FiveOfSixComplementary,
            // 6-element sets cannot intersect in more than 6 numbers
            (_, _) => Self::SixOfSix,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ZeroOfSix => "0 of 6",
            Self::OneOfSix => "1 of 6",
            Self::TwoOfSix => "2 of 6",
            Self::TwoOfSixComplementary => "2 of 6 + complementary",
            Self::ThreeOfSix => "3 of 6",
            Self::FourOfSix => "4 of 6",
            Self::FiveOfSix => "5 of 6",
            Self::FiveOfSixComplementary => "5 of 6 + complementary",
            Self::SixOfSix => "6 of 6",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
