pub(crate) mod rating;

pub use rating::{MAX_RATING, RatingRecord};
