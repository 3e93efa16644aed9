// Service exports
pub mod hotpepper;

pub use hotpepper::{HotPepperClient, HotPepperError, QueryParams};
