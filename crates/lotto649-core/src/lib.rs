pub mod lotto;
pub mod stats;
