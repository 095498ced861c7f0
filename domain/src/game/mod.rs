mod action;
pub mod config;
mod error;
mod revenue;
mod round;
mod state;
mod summary;
mod vendor;

#[cfg(test)]
mod tests;

pub use action::PlayerAction;
pub use error::ParseActionError;
pub use revenue::{CumulativeRevenue, cumulative_revenues};
pub use round::{CustomerChoice, RoundResult, choose_vendor, resolve_round, willingness};
pub use state::{GamePhase, GameState};
pub use summary::{NO_ROUNDS_MESSAGE, describe_last_round};
pub use vendor::{Customer, Vendor, VendorId};
