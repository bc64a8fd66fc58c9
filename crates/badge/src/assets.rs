use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, RgbaImage};

use crate::composer::{HEIGHT, WIDTH};
use crate::error::{BadgeError, Result};
use crate::text::LabelFont;

/// Bounding box the star icons are scaled into.
pub const ICON_SIZE: u32 = 16;

pub const BANNER_FILE: &str = "banner.png";
pub const HALF_STAR_FILE: &str = "half.png";
pub const STAR_FILE: &str = "star.png";
pub const FONT_FILE: &str = "DejaVuSans.ttf";

/// The images and label font every badge is composed from, prepared once at
/// startup and shared read-only between requests.
#[derive(Debug, Clone)]
pub struct Assets {
    banner: RgbaImage,
    half: RgbaImage,
    star: RgbaImage,
    font: LabelFont,
}

impl Assets {
    /// Loads `banner.png`, `half.png`, `star.png` and `DejaVuSans.ttf` from `dir`.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let open = |name: &str| {
            let path = dir.join(name);
            image::open(&path).map_err(|source| BadgeError::AssetLoad { path, source })
        };

        let banner = open(BANNER_FILE)?;
        let half = open(HALF_STAR_FILE)?;
        let star = open(STAR_FILE)?;

        let path = dir.join(FONT_FILE);
        let bytes = std::fs::read(&path).map_err(|source| BadgeError::FontLoad {
            path: path.clone(),
            source,
        })?;
        let font = LabelFont::from_bytes(bytes).ok_or(BadgeError::InvalidFont(path))?;
        tracing::debug!("Loaded label font {}", font.family());

        Ok(Self::from_images(banner, half, star, font))
    }

    pub fn from_images(
        banner: DynamicImage,
        half: DynamicImage,
        star: DynamicImage,
        font: LabelFont,
    ) -> Self {
        Self {
            banner: scale_to_fit(&banner, WIDTH, HEIGHT),
            half: scale_to_fit(&half, ICON_SIZE, ICON_SIZE),
            star: scale_to_fit(&star, ICON_SIZE, ICON_SIZE),
            font,
        }
    }

    pub fn banner(&self) -> &RgbaImage {
        &self.banner
    }

    pub fn half(&self) -> &RgbaImage {
        &self.half
    }

    pub fn star(&self) -> &RgbaImage {
        &self.star
    }

    pub fn font(&self) -> &LabelFont {
        &self.font
    }
}

/// Scales up or down, preserving aspect ratio, to the largest size within the box.
pub(crate) fn scale_to_fit(image: &DynamicImage, width: u32, height: u32) -> RgbaImage {
    image.resize(width, height, FilterType::Triangle).to_rgba8()
}
