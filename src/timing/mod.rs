mod pacing;
mod rate;

pub use pacing::PacingTimer;
pub use rate::RateCounter;
