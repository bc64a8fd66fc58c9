use std::io::Cursor;

use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};

use crate::assets::Assets;
use crate::config::{DisplayConfig, RatingType};
use crate::error::{BadgeError, Result};
use crate::quantizer::WeightedRating;
use crate::text;

pub const WIDTH: u32 = 230;
pub const HEIGHT: u32 = 345;
pub const PADDING: i64 = 8;

const LABEL_X: u32 = 32;
const LABEL_OFFSET_Y: u32 = 8;
const LABEL_FONT_SIZE: f32 = 16.0;
const LABEL_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Horizontal offsets, within the star strip, of every icon blitted for a rating.
///
/// The half star sits innermost right; full stars extend leftwards from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarLayout {
    pub half_star_x: Option<i64>,
    pub full_star_xs: Vec<i64>,
}

impl StarLayout {
    pub fn for_rating(weighted: WeightedRating, star_width: u32, half_width: u32) -> Self {
        let width = i64::from(WIDTH);
        let star_width = i64::from(star_width);
        let half_width = i64::from(half_width);

        let half_star_x = weighted
            .has_half_star()
            .then_some(width - half_width - PADDING);
        let half_offset = if half_star_x.is_some() { half_width } else { 0 };

        let start_x = width - star_width - PADDING;
        let full_star_xs = (0..i64::from(weighted.full_stars()))
            .map(|i| start_x - i * star_width - PADDING - half_offset)
            .collect();

        Self {
            half_star_x,
            full_star_xs,
        }
    }
}

/// Composites the badge and encodes it as PNG.
pub fn compose(
    poster: &[u8],
    rating: f64,
    weighted: WeightedRating,
    assets: &Assets,
    config: &DisplayConfig,
) -> Result<Vec<u8>> {
    let canvas = render(poster, rating, weighted, assets, config)?;
    encode_png(&canvas)
}

/// Composites the badge onto a fresh `WIDTH`x`HEIGHT` canvas.
pub(crate) fn render(
    poster: &[u8],
    rating: f64,
    weighted: WeightedRating,
    assets: &Assets,
    config: &DisplayConfig,
) -> Result<RgbaImage> {
    let poster = image::load_from_memory(poster).map_err(BadgeError::ImageDecode)?;
    let mut canvas = fit_on_canvas(&poster);

    let banner = assets.banner();
    let banner_y = i64::from(HEIGHT) - i64::from(banner.height());
    imageops::overlay(&mut canvas, banner, 0, banner_y);

    let strip = star_strip(weighted, assets);
    let strip_x = i64::from(WIDTH) - i64::from(strip.width()) - PADDING;
    let strip_y = i64::from(HEIGHT) - i64::from(assets.star().height()) - PADDING;
    imageops::overlay(&mut canvas, &strip, strip_x, strip_y);

    if config.rating_type == RatingType::Numbers {
        let label_y = HEIGHT.saturating_sub(banner.height()) + LABEL_OFFSET_Y;
        let label = text::render_label(
            assets.font(),
            &rating.to_string(),
            LABEL_FONT_SIZE,
            LABEL_COLOR,
        );
        imageops::overlay(&mut canvas, &label, i64::from(LABEL_X), i64::from(label_y));
    }

    Ok(canvas)
}

/// Scales the poster to fit the canvas and centres it.
fn fit_on_canvas(poster: &DynamicImage) -> RgbaImage {
    let scaled = poster.resize(WIDTH, HEIGHT, FilterType::Triangle).to_rgba8();

    let mut canvas = RgbaImage::new(WIDTH, HEIGHT);
    let x = i64::from((WIDTH - scaled.width()) / 2);
    let y = i64::from((HEIGHT - scaled.height()) / 2);
    imageops::overlay(&mut canvas, &scaled, x, y);
    canvas
}

fn star_strip(weighted: WeightedRating, assets: &Assets) -> RgbaImage {
    let (star, half) = (assets.star(), assets.half());

    // Fully transparent, but at full luminance so edge blending stays bright.
    let mut strip = RgbaImage::from_pixel(WIDTH, star.height(), Rgba([255, 255, 255, 0]));

    let layout = StarLayout::for_rating(weighted, star.width(), half.width());
    if let Some(x) = layout.half_star_x {
        imageops::overlay(&mut strip, half, x, 0);
    }
    for x in layout.full_star_xs {
        tracing::debug!("Blitting star {}", x);
        imageops::overlay(&mut strip, star, x, 0);
    }

    strip
}

fn encode_png(canvas: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    canvas
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(BadgeError::ImageEncode)?;
    Ok(bytes)
}
