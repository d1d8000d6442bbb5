use crate::lotto::{Category, Combination, Ticket};
use std::collections::BTreeMap;

/// Aggregated reports for one drawing round.
///
/// Pure functions of the ticket, its winners and the drawn winning
/// combination; nothing here re-runs generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundStats {
    /// Ticket size.
    pub total_combinations: usize,
    /// Size of the winners list.
    pub winning_combinations: usize,
    /// Frequency of each number across winning combinations, keyed
    /// ascending.
    pub occurrences: BTreeMap<u8, usize>,
    /// Count per prize tier over the whole ticket, keyed by tier label.
    /// Every tier is present, including empty ones.
    pub categories: BTreeMap<&'static str, usize>,
}

impl RoundStats {
    pub fn compute(ticket: &Ticket, winners: &[Combination], winning: &Combination) -> Self {
        Self {
            total_combinations: ticket.combinations.len(),
            winning_combinations: winners.len(),
            occurrences: number_occurrences(winners),
            categories: category_counts(ticket, winning),
        }
    }

    /// Tier rows in label order: `(label, count, percentage)`.
    ///
    /// Percentages are taken against the ticket total, not the winner
    /// count, and sum to 100 over the nine tiers.
    pub fn category_rows(&self) -> Vec<(&'static str, usize, f64)> {
        self.categories
            .iter()
            .map(|(&label, &count)| {
                let percentage = count as f64 / self.total_combinations as f64 * 100.0;
                (label, count, percentage)
            })
            .collect()
    }
}

/// Count how often each number appears across the winning combinations.
pub fn number_occurrences(winners: &[Combination]) -> BTreeMap<u8, usize> {
    let mut occurrences = BTreeMap::new();
    for combination in winners {
        for &number in &combination.numbers {
            *occurrences.entry(number).or_insert(0) += 1;
        }
    }
    occurrences
}

/// Classify every ticket combination into its prize tier.
pub fn category_counts(ticket: &Ticket, winning: &Combination) -> BTreeMap<&'static str, usize> {
    let mut counts: BTreeMap<&'static str, usize> = Category::ALL
        .iter()
        .map(|category| (category.label(), 0))
        .collect();

    for combination in &ticket.combinations {
        let category = Category::from_result(ticket.check(combination, winning));
        *counts.entry(category.label()).or_insert(0) += 1;
    }

    counts
}
