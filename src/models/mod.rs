// Model exports
pub mod domain;
pub mod requests;

pub use domain::{
    ApiResponse, ApiResults, Budget, Genre, MasterDataKind, MasterEntry, Photo, PhotoPc,
    ScoredShop, Shop, ShopUrls,
};
pub use requests::{SearchByAreaParams, SearchRestaurantsParams};
