pub mod estimator;
pub mod format;
pub mod rate_card;

pub use estimator::{estimate, estimate_with};
pub use format::{AmountFormatter, Inr, Passthrough};
pub use rate_card::{rate_card, RateCard, RateCardRow};
