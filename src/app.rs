//! Console boundary: prompts, re-prompting, and formatted output.
//!
//! Everything here is presentation glue; the core stays unaware of the
//! terminal and of the retry loop.

use console::{Term, style};
use lotto649_core::lotto::{Combination, Ticket};
use lotto649_core::stats::RoundStats;
use std::io::{self, Write as _};

pub fn clear_screen() -> anyhow::Result<()> {
    Term::stdout().clear_screen()?;
    Ok(())
}

fn read_line() -> anyhow::Result<String> {
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        anyhow::bail!("stdin closed while waiting for input");
    }
    Ok(line.trim().to_owned())
}

/// Ask for the number of combinations to play, re-prompting until the
/// answer is an integer in `min..=max`. The core never sees an
/// out-of-range count.
pub fn prompt_combination_count(min: usize, max: usize) -> anyhow::Result<usize> {
    loop {
        print!("Number of combinations to play ({min}-{max}): ");
        io::stdout().flush()?;

        match read_line()?.parse::<usize>() {
            Ok(count) if count >= min && count <= max => return Ok(count),
            _ => println!("Please enter a whole number between {min} and {max}."),
        }
    }
}

/// Ask whether to play another round. `y` or `yes`, case-insensitive.
pub fn prompt_retry() -> anyhow::Result<bool> {
    print!("\nPlay again? (y/n): ");
    io::stdout().flush()?;

    let response = read_line()?.to_lowercase();
    Ok(response == "y" || response == "yes")
}

fn paint(combination: &Combination) -> String {
    style(combination).red().bold().to_string()
}

pub fn display_ticket(ticket: &Ticket) {
    println!("\nYour combinations:");
    for (i, combination) in ticket.combinations.iter().enumerate() {
        println!("Combination {}: {}", i + 1, paint(combination));
    }
    println!(
        "Complementary number: {}",
        style(ticket.complementary).blue().bold()
    );
}

pub fn display_winning_combination(winning: &Combination) {
    println!("\nWinning combination: {}", paint(winning));
}

pub fn display_winners(winners: &[Combination]) {
    println!("\nYour winning combinations:");
    if winners.is_empty() {
        println!("No winning combination.");
        return;
    }
    for (i, combination) in winners.iter().enumerate() {
        println!("Combination {}: {}", i + 1, paint(combination));
    }
}

pub fn display_stats(stats: &RoundStats) {
    println!("\nNumber frequency among winning combinations:");
    for (number, count) in &stats.occurrences {
        println!("Number {number}: {count} times");
    }

    println!("\nCombinations played: {}", stats.total_combinations);
    println!("Winning combinations: {}", stats.winning_combinations);
    println!();

    for (label, count, percentage) in stats.category_rows() {
        println!("{label}: {count} combinations ({percentage:.2}%)");
    }
}
