use crate::*;

#[derive(Default, Clone)]
struct ExpectedRound {
    player: Option<u32>,
    competitor: Option<u32>,
    none: Option<u32>,
    player_revenue: Option<u32>,
    competitor_revenue: Option<u32>,
}

fn round() -> ExpectedRound {
    ExpectedRound::default()
}

impl ExpectedRound {
    fn player(
        mut self,
        count: u32,
    ) -> Self {
        self.player = Some(count);
        self
    }

    fn competitor(
        mut self,
        count: u32,
    ) -> Self {
        self.competitor = Some(count);
        self
    }

    fn none(
        mut self,
        count: u32,
    ) -> Self {
        self.none = Some(count);
        self
    }

    fn revenue(
        mut self,
        player: u32,
        competitor: u32,
    ) -> Self {
        self.player_revenue = Some(player);
        self.competitor_revenue = Some(competitor);
        self
    }
}

struct TestHarness {
    game: GameState,
}

impl TestHarness {
    fn new() -> Self {
        Self {
            game: GameState::initial(),
        }
    }

    fn with_vendors(
        mut self,
        player: (i32, u32),
        competitor: (i32, u32),
    ) -> Self {
        self.game = self.game.with_vendors(
            Vendor::new(VendorId::Player, player.0, player.1),
            Vendor::new(VendorId::Competitor, competitor.0, competitor.1),
        );
        self
    }

    fn with_customers(
        mut self,
        positions: &[i32],
    ) -> Self {
        self.game = self.game.with_customers(positions);
        self
    }

    fn act(
        &mut self,
        action: PlayerAction,
    ) -> &mut Self {
        self.game = self.game.apply_action(action);
        self
    }

    fn repeat(
        &mut self,
        action: PlayerAction,
        times: usize,
    ) -> &mut Self {
        for _ in 0..times {
            self.act(action);
        }
        self
    }

    #[track_caller]
    fn check_player(
        &self,
        position_km: i32,
        price: u32,
    ) -> &Self {
        let player = self.game.player();
        assert_eq!(player.position_km, position_km, "player position");
        assert_eq!(player.price, price, "player price");
        self
    }

    #[track_caller]
    fn check_round_index(
        &self,
        expected: u32,
    ) -> &Self {
        assert_eq!(self.game.round_index(), expected, "round index");
        assert_eq!(self.game.history().len(), expected as usize, "history length");
        self
    }

    #[track_caller]
    fn check_last(
        &self,
        expected: ExpectedRound,
    ) -> &Self {
        let last = self.game.latest_round().expect("no round played");
        check_result(last, &expected, self.game.player().price, self.game.competitor().price);
        self
    }
}

#[track_caller]
fn check_result(
    result: &RoundResult,
    expected: &ExpectedRound,
    player_price: u32,
    competitor_price: u32,
) {
    let index = result.round_index;
    if let Some(player) = expected.player {
        assert_eq!(result.player_customers, player, "Round {index}: player customers");
    }
    if let Some(competitor) = expected.competitor {
        assert_eq!(result.competitor_customers, competitor, "Round {index}: competitor customers");
    }
    if let Some(none) = expected.none {
        assert_eq!(result.no_purchase_customers, none, "Round {index}: no-purchase customers");
    }
    if let Some(revenue) = expected.player_revenue {
        assert_eq!(result.player_revenue, revenue, "Round {index}: player revenue");
    }
    if let Some(revenue) = expected.competitor_revenue {
        assert_eq!(result.competitor_revenue, revenue, "Round {index}: competitor revenue");
    }
    assert_eq!(result.player_revenue, result.player_customers * player_price);
    assert_eq!(result.competitor_revenue, result.competitor_customers * competitor_price);
}

#[test]
fn test_initial_state() {
    let game = GameState::initial();

    assert_eq!(game.round_index(), 0);
    assert_eq!(game.max_rounds(), 10);
    assert_eq!(game.phase(), GamePhase::InProgress);
    assert!(game.history().is_empty());
    assert_eq!(*game.player(), Vendor::new(VendorId::Player, 0, 5));
    assert_eq!(*game.competitor(), Vendor::new(VendorId::Competitor, 10, 5));

    let positions: Vec<i32> = game.customers().iter().map(|c| c.position_km).collect();
    assert_eq!(positions, (1..=9).collect::<Vec<_>>());
    assert_eq!(game, GameState::default());
}

#[test]
fn test_willingness_curve() {
    assert_eq!(willingness(0), 10);
    assert_eq!(willingness(1), 10);
    assert_eq!(willingness(2), 9);
    assert_eq!(willingness(4), 7);
    assert_eq!(willingness(10), 1);
    assert_eq!(willingness(11), 0);
    assert_eq!(willingness(50), 0);
    assert_eq!(willingness(u32::MAX), 0);
}

#[test]
fn test_willingness_never_increases_with_distance() {
    for d in 0..30 {
        assert!(
            willingness(d) >= willingness(d + 1),
            "willingness rose between {} and {} km",
            d,
            d + 1
        );
    }
}

#[test]
fn test_resolve_round_does_not_touch_state() {
    let game = GameState::initial();
    let result = resolve_round(&game);

    assert_eq!(result.round_index, 1);
    assert_eq!(game, GameState::initial());
    // Player at 0, competitor at 10: customer at 5 km is a tie.
    check_result(&result, &round().player(4).competitor(4).none(1).revenue(20, 20), 5, 5);
}

#[test]
fn test_tie_goes_to_no_purchase() {
    let t = TestHarness::new().with_vendors((5, 0), (5, 0));
    let result = resolve_round(&t.game);

    check_result(&result, &round().player(0).competitor(0).none(9).revenue(0, 0), 0, 0);
}

#[test]
fn test_tie_ignores_prices() {
    let t = TestHarness::new().with_vendors((2, 0), (6, 100)).with_customers(&[4]);

    assert_eq!(
        choose_vendor(&t.game.customers()[0], t.game.player(), t.game.competitor()),
        CustomerChoice::NoPurchase
    );
}

#[test]
fn test_price_equal_to_willingness_sells() {
    // Customer 4 km away has willingness 7.
    let t = TestHarness::new().with_vendors((0, 7), (10, 5)).with_customers(&[4]);
    let result = resolve_round(&t.game);
    check_result(&result, &round().player(1).none(0).revenue(7, 0), 7, 5);

    let t = TestHarness::new().with_vendors((0, 8), (10, 5)).with_customers(&[4]);
    let result = resolve_round(&t.game);
    check_result(&result, &round().player(0).none(1).revenue(0, 0), 8, 5);
}

#[test]
fn test_nearer_vendor_too_expensive_loses_sale() {
    // The competitor is cheap but farther away, so it never gets the customer.
    let t = TestHarness::new().with_vendors((3, 20), (9, 0)).with_customers(&[4]);
    let result = resolve_round(&t.game);

    check_result(&result, &round().player(0).competitor(0).none(1), 20, 0);
}

#[test]
fn test_free_goods_always_sell_to_nearest() {
    let t = TestHarness::new().with_vendors((0, 0), (10, 5)).with_customers(&[0, 1, 4]);
    let result = resolve_round(&t.game);

    check_result(&result, &round().player(3).revenue(0, 0), 0, 5);
}

#[test]
fn test_customer_count_conserved() {
    let mut t = TestHarness::new();
    for action in PlayerAction::ALL.iter().cycle().take(10) {
        t.act(*action);
        let last = t.game.latest_round().expect("round played");
        assert_eq!(last.total_customers(), 9);
    }
}

#[test]
fn test_move_left_stops_at_line_start() {
    let mut t = TestHarness::new();

    t.repeat(PlayerAction::MoveLeft, 3);
    t.check_player(0, 5).check_round_index(3);
}

#[test]
fn test_move_right_stops_at_line_end() {
    let mut t = TestHarness::new().with_vendors((9, 5), (10, 5));

    t.repeat(PlayerAction::MoveRight, 3);
    t.check_player(10, 5);
}

#[test]
fn test_price_down_stops_at_zero() {
    let mut t = TestHarness::new();

    t.repeat(PlayerAction::PriceDown, 7);
    t.check_player(0, 0).check_round_index(7);
    t.check_last(round().revenue(0, 20));
}

#[test]
fn test_price_up_has_no_ceiling() {
    let mut t = TestHarness::new();

    t.repeat(PlayerAction::PriceUp, 10);
    t.check_player(0, 15);
    // Nobody pays more than 10.
    t.check_last(round().player(0).competitor(4).none(5));
}

#[test]
fn test_action_leaves_competitor_and_customers_alone() {
    let start = GameState::initial();
    let next = start.apply_action(PlayerAction::MoveRight);

    assert_eq!(next.competitor(), start.competitor());
    assert_eq!(next.customers(), start.customers());
    assert_eq!(start, GameState::initial());
}

#[test]
fn test_complete_game_ignores_actions() {
    let mut t = TestHarness::new();
    t.repeat(PlayerAction::PriceUp, 10);
    assert!(t.game.is_complete());
    assert_eq!(t.game.rounds_remaining(), 0);

    let finished = t.game.clone();
    for action in PlayerAction::ALL {
        assert_eq!(finished.apply_action(action), finished);
    }
    t.act(PlayerAction::MoveLeft).check_round_index(10).check_player(0, 15);
}

#[test]
fn test_full_game_scenario() {
    let mut t = TestHarness::new();
    let expected = [
        // move right to 1..=5 km at $5
        round().player(5).competitor(4).none(0).revenue(25, 20),
        round().player(5).competitor(3).none(1).revenue(25, 15),
        round().player(6).competitor(3).none(0).revenue(30, 15),
        round().player(6).competitor(2).none(1).revenue(30, 10),
        round().player(7).competitor(2).none(0).revenue(35, 10),
        // raise price at 5 km
        round().player(7).competitor(2).none(0).revenue(42, 10),
        round().player(7).competitor(2).none(0).revenue(49, 10),
        round().player(6).competitor(2).none(1).revenue(48, 10),
        round().player(5).competitor(2).none(2).revenue(45, 10),
        round().player(3).competitor(2).none(4).revenue(30, 10),
    ];

    t.repeat(PlayerAction::MoveRight, 5).check_player(5, 5);
    t.repeat(PlayerAction::PriceUp, 5).check_player(5, 10);
    t.check_round_index(10);
    assert_eq!(t.game.phase(), GamePhase::Complete);

    let mut price = 5;
    for (i, (result, expected)) in t.game.history().iter().zip(expected.iter()).enumerate() {
        if i >= 5 {
            price += 1;
        }
        assert_eq!(result.round_index, i as u32 + 1);
        check_result(result, expected, price, 5);
    }

    let cumulative = cumulative_revenues(t.game.history());
    assert_eq!(cumulative.player, vec![25, 50, 80, 110, 145, 187, 236, 284, 329, 359]);
    assert_eq!(cumulative.competitor, vec![20, 35, 50, 60, 70, 80, 90, 100, 110, 120]);
    assert_eq!(cumulative.totals(), (359, 120));
}

#[test]
fn test_cumulative_revenues() {
    let history = [
        RoundResult {
            round_index: 1,
            player_customers: 1,
            competitor_customers: 0,
            no_purchase_customers: 8,
            player_revenue: 5,
            competitor_revenue: 0,
        },
        RoundResult {
            round_index: 2,
            player_customers: 1,
            competitor_customers: 1,
            no_purchase_customers: 7,
            player_revenue: 3,
            competitor_revenue: 4,
        },
    ];

    let cumulative = cumulative_revenues(&history);
    assert_eq!(cumulative.player, vec![5, 8]);
    assert_eq!(cumulative.competitor, vec![0, 4]);
    assert_eq!(cumulative_revenues(&[]), CumulativeRevenue::default());
    assert_eq!(CumulativeRevenue::default().totals(), (0, 0));
}

#[test]
fn test_reset_restores_initial_state() {
    let mut t = TestHarness::new();
    t.repeat(PlayerAction::MoveRight, 4).repeat(PlayerAction::PriceDown, 2);
    assert_ne!(t.game, GameState::initial());

    t.game = GameState::initial();
    t.check_round_index(0).check_player(0, 5);
    assert_eq!(t.game, GameState::initial());
}

#[test]
fn test_describe_last_round() {
    assert_eq!(describe_last_round(None), NO_ROUNDS_MESSAGE);

    let game = GameState::initial().apply_action(PlayerAction::MoveRight);
    assert_eq!(
        describe_last_round(game.latest_round()),
        "Round 1: You served 5 customer(s), earning $25.00. The competitor served 4 customer(s), and 0 customer(s) did not buy from anyone."
    );
}

#[test]
fn test_parse_actions() {
    assert_eq!("price_up".parse::<PlayerAction>(), Ok(PlayerAction::PriceUp));
    assert_eq!(" MOVE_LEFT ".parse::<PlayerAction>(), Ok(PlayerAction::MoveLeft));
    for action in PlayerAction::ALL {
        assert_eq!(action.to_string().parse::<PlayerAction>(), Ok(action));
    }
    assert_eq!(
        "jump".parse::<PlayerAction>(),
        Err(ParseActionError::UnknownAction("jump".to_string()))
    );
}

#[test]
fn test_state_serializes_with_snake_case_tags() {
    let game = GameState::initial().apply_action(PlayerAction::PriceDown);
    let json = serde_json::to_value(&game).expect("serialize");

    assert_eq!(json["player"]["id"], "player");
    assert_eq!(json["competitor"]["id"], "competitor");
    assert_eq!(json["history"][0]["player_revenue"], 16);
    assert_eq!(serde_json::to_value(PlayerAction::MoveRight).expect("serialize"), "move_right");

    let back: GameState = serde_json::from_value(json).expect("deserialize");
    assert_eq!(back, game);
}
