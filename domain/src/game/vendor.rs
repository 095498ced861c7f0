use std::fmt;

use serde::{Deserialize, Serialize};

use super::config::{LINE_END_KM, LINE_START_KM};

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VendorId {
    Player,
    Competitor,
}

impl fmt::Display for VendorId {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            VendorId::Player => f.write_str("player"),
            VendorId::Competitor => f.write_str("competitor"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vendor {
    pub id: VendorId,
    pub position_km: i32,
    pub price: u32,
}

impl Vendor {
    #[must_use]
    pub fn new(
        id: VendorId,
        position_km: i32,
        price: u32,
    ) -> Self {
        Self {
            id,
            position_km: clamp_to_line(position_km),
            price,
        }
    }

    #[must_use]
    pub fn distance_to(
        &self,
        position_km: i32,
    ) -> u32 {
        self.position_km.abs_diff(position_km)
    }

    /// Returns a copy moved by `delta_km`, stopped at either end of the line.
    #[must_use]
    pub fn moved_by(
        self,
        delta_km: i32,
    ) -> Self {
        Self {
            position_km: clamp_to_line(self.position_km.saturating_add(delta_km)),
            ..self
        }
    }

    /// Returns a copy with the price raised by `delta`. Prices have no upper bound.
    #[must_use]
    pub fn price_raised(
        self,
        delta: u32,
    ) -> Self {
        Self {
            price: self.price.saturating_add(delta),
            ..self
        }
    }

    /// Returns a copy with the price lowered by `delta`, never going below zero.
    #[must_use]
    pub fn price_lowered(
        self,
        delta: u32,
    ) -> Self {
        Self {
            price: self.price.saturating_sub(delta),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub position_km: i32,
}

impl Customer {
    #[must_use]
    pub fn new(position_km: i32) -> Self {
        Self {
            position_km: clamp_to_line(position_km),
        }
    }
}

fn clamp_to_line(position_km: i32) -> i32 {
    position_km.clamp(LINE_START_KM, LINE_END_KM)
}
