pub mod post;
pub mod vehicle;
pub mod weekly;

pub use post::{Listing, RedditPost};
pub use vehicle::{format_price, DiscountLine, DiscountTier, VehicleFailure, VehicleRecord};
pub use weekly::{Robbery, WeeklyUpdate, NOT_FOUND, SEE_FULL_POST};
