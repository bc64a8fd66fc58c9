//! Rating badge rendering: quantize a film's audience rating into half-star
//! steps and composite a star row onto its poster.

pub mod assets;
pub mod composer;
pub mod config;
pub mod error;
pub mod quantizer;
pub mod text;

pub use assets::Assets;
pub use composer::{HEIGHT, PADDING, StarLayout, WIDTH, compose};
pub use config::{DisplayConfig, RatingType};
pub use error::{BadgeError, ConfigDecodeError, Result};
pub use quantizer::{WeightedRating, quantize};
pub use text::LabelFont;
