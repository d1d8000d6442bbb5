mod check;
mod def;
mod generate;
mod ticket;

pub use check::{Category, MatchResult};
pub use def::{COMBINATION_SIZE, Combination, CombinationError, NUMBER_MAX, NUMBER_MIN};
pub use ticket::{MAX_COMBINATIONS, MIN_COMBINATIONS, Ticket, TicketError};
