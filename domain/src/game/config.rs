//! Fixed parameters of the market. None of these are configurable at runtime.

/// Customers stand at `1..=CUSTOMER_COUNT` km.
pub const CUSTOMER_COUNT: u32 = 9;

pub const LINE_START_KM: i32 = 0;
pub const LINE_END_KM: i32 = 10;

pub const MAX_ROUNDS: u32 = 10;

pub const PLAYER_START_KM: i32 = LINE_START_KM;
pub const COMPETITOR_START_KM: i32 = LINE_END_KM;
pub const STARTING_PRICE: u32 = 5;

/// Highest price any customer will pay.
pub const MAX_WILLINGNESS: u32 = 10;

/// Willingness is `WILLINGNESS_INTERCEPT - distance`, saturated into `[0, MAX_WILLINGNESS]`.
/// With an intercept of 11 the cap covers every distance up to 1 km.
pub const WILLINGNESS_INTERCEPT: i64 = 11;

pub const POSITION_STEP_KM: i32 = 1;
pub const PRICE_STEP: u32 = 1;
