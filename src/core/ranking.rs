use crate::core::scoring::score_shop;
use crate::models::{ScoredShop, Shop};

/// Results shown when the caller does not ask for a count
pub const DEFAULT_RESULT_COUNT: u32 = 10;
/// Upper bound the upstream search accepts for one request
pub const MAX_FETCH_COUNT: u32 = 100;

/// Number of candidates to request upstream for a given display count
///
/// The upstream API paginates independently of our scoring, so we over-fetch
/// to give the scorer a wider pool before truncating to the display count.
pub fn fetch_count(requested: u32) -> u32 {
    requested.saturating_mul(3).min(MAX_FETCH_COUNT)
}

/// A scored, sorted, truncated candidate list
#[derive(Debug)]
pub struct RankedShops {
    pub shops: Vec<ScoredShop>,
    /// Size of the fetched pool the ranking considered
    pub total_fetched: usize,
}

/// Score every fetched candidate, sort by score, keep the top `requested`
///
/// The sort is stable: candidates with equal scores keep the order the
/// upstream service returned them in.
pub fn rank_shops(shops: Vec<Shop>, requested: usize, party_capacity: Option<u32>) -> RankedShops {
    let total_fetched = shops.len();

    let mut scored: Vec<ScoredShop> = shops
        .into_iter()
        .map(|shop| ScoredShop {
            score: score_shop(&shop, party_capacity),
            shop,
        })
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(requested);

    RankedShops {
        shops: scored,
        total_fetched,
    }
}
