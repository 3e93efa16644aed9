use crate::models::Shop;

/// Score weights for the priority ranking
///
/// The values and their evaluation order are a contract: callers rely on
/// relative ranking staying stable across otherwise-identical result sets.
pub mod weights {
    /// Base score when the shop can seat the requested party
    pub const CAPACITY_BASE: u32 = 20;
    /// Seats at least twice the party size
    pub const CAPACITY_RATIO_DOUBLE: u32 = 10;
    /// Seats at least 1.5x the party size
    pub const CAPACITY_RATIO_1_5: u32 = 7;
    /// Seats at least 1.2x the party size
    pub const CAPACITY_RATIO_1_2: u32 = 5;

    pub const FREE_DRINK: u32 = 15;
    pub const PRIVATE_ROOM: u32 = 12;
    pub const FREE_FOOD: u32 = 8;
    pub const MIDNIGHT: u32 = 5;
    pub const CARD: u32 = 3;
    pub const WIFI: u32 = 2;
    pub const LUNCH: u32 = 1;
}

/// Compute the priority score for one shop
///
/// Capacity fit is only evaluated when both the shop capacity and the
/// requested party size are known and the shop can actually seat the party.
/// Feature bonuses are independent and purely additive; a shop with no
/// matching signals scores 0.
pub fn score_shop(shop: &Shop, party_capacity: Option<u32>) -> u32 {
    let mut score = 0;

    if let (Some(capacity), Some(party)) = (shop.capacity, party_capacity) {
        if party > 0 && capacity >= party {
            score += weights::CAPACITY_BASE;
            // More headroom ranks higher; tiers are mutually exclusive
            let ratio = capacity as f64 / party as f64;
            if ratio >= 2.0 {
                score += weights::CAPACITY_RATIO_DOUBLE;
            } else if ratio >= 1.5 {
                score += weights::CAPACITY_RATIO_1_5;
            } else if ratio >= 1.2 {
                score += weights::CAPACITY_RATIO_1_2;
            }
        }
    }

    if shop.has_free_drink() {
        score += weights::FREE_DRINK;
    }
    if shop.has_private_room() {
        score += weights::PRIVATE_ROOM;
    }
    if shop.has_free_food() {
        score += weights::FREE_FOOD;
    }
    if shop.open_past_midnight() {
        score += weights::MIDNIGHT;
    }
    if shop.accepts_card() {
        score += weights::CARD;
    }
    if shop.has_wifi() {
        score += weights::WIFI;
    }
    if shop.has_lunch() {
        score += weights::LUNCH;
    }

    score
}
