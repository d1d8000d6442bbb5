mod app;

use lotto649_core::lotto::{Combination, MAX_COMBINATIONS, MIN_COMBINATIONS, Ticket};
use lotto649_core::stats::RoundStats;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // One random source for the whole process, threaded through every
    // generation call in sequence.
    let mut rng = rand::thread_rng();

    loop {
        app::clear_screen()?;

        let count = app::prompt_combination_count(MIN_COMBINATIONS, MAX_COMBINATIONS)?;
        let ticket = Ticket::generate(count, &mut rng)?;
        app::display_ticket(&ticket);

        let winning = Combination::generate(&mut rng, ticket.complementary);
        log::debug!("drew winning combination {winning}");
        app::display_winning_combination(&winning);

        let winners = ticket.winning_combinations(&winning);
        app::display_winners(&winners);

        let stats = RoundStats::compute(&ticket, &winners, &winning);
        app::display_stats(&stats);

        if !app::prompt_retry()? {
            break;
        }
    }

    Ok(())
}
