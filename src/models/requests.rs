use serde::Deserialize;
use validator::Validate;

/// Arguments for the `search_restaurants` tool
///
/// Every field is optional; unknown keys in the argument object are ignored.
/// Range checks run once at the dispatcher boundary via `validate()`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct SearchRestaurantsParams {
    pub keyword: Option<String>,
    #[validate(range(min = -90.0, max = 90.0, message = "lat must be between -90 and 90"))]
    pub lat: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0, message = "lng must be between -180 and 180"))]
    pub lng: Option<f64>,
    #[validate(range(min = 1, max = 5, message = "range must be between 1 and 5"))]
    pub range: Option<u8>,
    pub genre: Option<String>,
    pub budget: Option<String>,
    pub party_capacity: Option<u32>,
    pub special: Option<String>,
    pub private_room: Option<bool>,
    pub wifi: Option<bool>,
    pub free_drink: Option<bool>,
    pub free_food: Option<bool>,
    pub lunch: Option<bool>,
    pub midnight: Option<bool>,
    pub parking: Option<bool>,
    pub card: Option<bool>,
    pub pet: Option<bool>,
    pub child: Option<bool>,
    #[validate(range(min = 1, max = 100, message = "count must be between 1 and 100"))]
    pub count: Option<u32>,
    pub start: Option<u32>,
}

/// Arguments for the `search_by_area` tool
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct SearchByAreaParams {
    pub large_area: Option<String>,
    pub middle_area: Option<String>,
    pub small_area: Option<String>,
    pub keyword: Option<String>,
    pub genre: Option<String>,
    pub budget: Option<String>,
    #[validate(range(min = 1, max = 100, message = "count must be between 1 and 100"))]
    pub count: Option<u32>,
}
