use super::round::RoundResult;

pub const NO_ROUNDS_MESSAGE: &str = "No rounds played yet. Choose an action to begin.";

#[must_use]
pub fn describe_last_round(last_round: Option<&RoundResult>) -> String {
    let Some(round) = last_round else {
        return NO_ROUNDS_MESSAGE.to_string();
    };

    format!(
        "Round {}: You served {} customer(s), earning ${:.2}. The competitor served {} customer(s), and {} customer(s) did not buy from anyone.",
        round.round_index,
        round.player_customers,
        f64::from(round.player_revenue),
        round.competitor_customers,
        round.no_purchase_customers,
    )
}
