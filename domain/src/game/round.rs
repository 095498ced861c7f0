use serde::{Deserialize, Serialize};

use super::config::{MAX_WILLINGNESS, WILLINGNESS_INTERCEPT};
use super::state::GameState;
use super::vendor::{Customer, Vendor, VendorId};

/// Outcome of one resolved round. Counts always add up to the customer count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub round_index: u32,
    pub player_customers: u32,
    pub competitor_customers: u32,
    pub no_purchase_customers: u32,
    pub player_revenue: u32,
    pub competitor_revenue: u32,
}

impl RoundResult {
    #[must_use]
    pub fn total_customers(&self) -> u32 {
        self.player_customers + self.competitor_customers + self.no_purchase_customers
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerChoice {
    Buys(VendorId),
    NoPurchase,
}

/// Highest price a customer pays to a vendor `distance_km` away.
///
/// Flat at `MAX_WILLINGNESS` up to 1 km, then drops by one per km until it reaches zero at 11 km.
#[must_use]
pub fn willingness(distance_km: u32) -> u32 {
    let raw = WILLINGNESS_INTERCEPT - i64::from(distance_km);
    if raw >= i64::from(MAX_WILLINGNESS) {
        return MAX_WILLINGNESS;
    }
    if raw <= 0 {
        return 0;
    }
    // 0 < raw < MAX_WILLINGNESS
    raw as u32
}

/// Decides where a single customer shops.
///
/// Equidistant vendors lose the customer entirely. Otherwise the nearer vendor
/// makes the sale when its price is at most the customer's willingness.
#[must_use]
pub fn choose_vendor(
    customer: &Customer,
    player: &Vendor,
    competitor: &Vendor,
) -> CustomerChoice {
    let player_distance = player.distance_to(customer.position_km);
    let competitor_distance = competitor.distance_to(customer.position_km);

    if player_distance == competitor_distance {
        return CustomerChoice::NoPurchase;
    }

    let (nearest, distance) = if player_distance < competitor_distance {
        (player, player_distance)
    } else {
        (competitor, competitor_distance)
    };

    if nearest.price <= willingness(distance) {
        CustomerChoice::Buys(nearest.id)
    } else {
        CustomerChoice::NoPurchase
    }
}

/// Resolves the round that follows `state` without touching its history.
#[must_use]
pub fn resolve_round(state: &GameState) -> RoundResult {
    let player = state.player();
    let competitor = state.competitor();

    let mut player_customers = 0;
    let mut competitor_customers = 0;
    let mut no_purchase_customers = 0;

    for customer in state.customers() {
        match choose_vendor(customer, player, competitor) {
            CustomerChoice::Buys(VendorId::Player) => player_customers += 1,
            CustomerChoice::Buys(VendorId::Competitor) => competitor_customers += 1,
            CustomerChoice::NoPurchase => no_purchase_customers += 1,
        }
    }

    RoundResult {
        round_index: state.round_index() + 1,
        player_customers,
        competitor_customers,
        no_purchase_customers,
        player_revenue: player_customers.saturating_mul(player.price),
        competitor_revenue: competitor_customers.saturating_mul(competitor.price),
    }
}
