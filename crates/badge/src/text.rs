use std::borrow::Cow;
use std::sync::Arc;

use image::{Rgba, RgbaImage};
use parley::layout::PositionedLayoutItem;
use parley::style::{FontStack, StyleProperty};

/// Font used for the numeric label, parsed once and shared between renders.
#[derive(Clone)]
pub struct LabelFont {
    bytes: Arc<Vec<u8>>,
    family: String,
    data: vello_cpu::peniko::FontData,
}

impl std::fmt::Debug for LabelFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabelFont")
            .field("bytes_len", &self.bytes.len())
            .field("family", &self.family)
            .finish()
    }
}

impl LabelFont {
    /// Returns `None` when the bytes contain no usable font family.
    pub fn from_bytes(bytes: Vec<u8>) -> Option<Self> {
        let mut font_ctx = parley::FontContext::default();
        let family = register(&mut font_ctx, &bytes)?;
        let data = vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes.clone()), 0);

        Some(Self {
            bytes: Arc::new(bytes),
            family,
            data,
        })
    }

    pub fn family(&self) -> &str {
        &self.family
    }
}

fn register(font_ctx: &mut parley::FontContext, bytes: &[u8]) -> Option<String> {
    let families = font_ctx
        .collection
        .register_fonts(parley::fontique::Blob::from(bytes.to_vec()), None);
    let (family_id, _) = families.first()?;
    font_ctx
        .collection
        .family_name(*family_id)
        .map(str::to_string)
}

/// Shapes `text` on a single line and rasterises it into a tightly sized image.
pub(crate) fn render_label(font: &LabelFont, text: &str, size_px: f32, color: Rgba<u8>) -> RgbaImage {
    let mut font_ctx = parley::FontContext::default();
    register(&mut font_ctx, &font.bytes);

    let mut layout_ctx = parley::LayoutContext::<()>::new();
    let mut builder = layout_ctx.ranged_builder(&mut font_ctx, text, 1.0, true);
    builder.push_default(StyleProperty::FontStack(FontStack::Source(Cow::Borrowed(
        font.family.as_str(),
    ))));
    builder.push_default(StyleProperty::FontSize(size_px));
    let mut layout: parley::Layout<()> = builder.build(text);
    layout.break_all_lines(None);

    let width = (layout.width().ceil() as u16).max(1);
    let height = (layout.height().ceil() as u16).max(1);

    let [r, g, b, a] = color.0;
    let mut ctx = vello_cpu::RenderContext::new(width, height);
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
    for line in layout.lines() {
        for item in line.items() {
            let PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };
            let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            });
            ctx.glyph_run(&font.data)
                .font_size(run.run().font_size())
                .fill_glyphs(glyphs);
        }
    }
    ctx.flush();

    let mut pixmap = vello_cpu::Pixmap::new(width, height);
    ctx.render_to_pixmap(&mut pixmap);

    let premul = pixmap.data_as_u8_slice();
    let row = usize::from(width) * 4;
    RgbaImage::from_fn(u32::from(width), u32::from(height), |x, y| {
        let i = y as usize * row + x as usize * 4;
        unpremultiply([premul[i], premul[i + 1], premul[i + 2], premul[i + 3]])
    })
}

fn unpremultiply(px: [u8; 4]) -> Rgba<u8> {
    let a = u16::from(px[3]);
    if a == 0 {
        return Rgba([0, 0, 0, 0]);
    }
    let c = |v: u8| ((u16::from(v) * 255 + a / 2) / a).min(255) as u8;
    Rgba([c(px[0]), c(px[1]), c(px[2]), px[3]])
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    fn shipped_font() -> LabelFont {
        let bytes = include_bytes!("../../../assets/DejaVuSans.ttf").to_vec();
        LabelFont::from_bytes(bytes).unwrap()
    }

    fn lit(image: &RgbaImage) -> Vec<&Rgba<u8>> {
        image.pixels().filter(|p| p[3] > 0).collect()
    }

    #[test]
    fn test_shipped_font_has_family() {
        assert_eq!(shipped_font().family(), "DejaVu Sans");
    }

    #[test]
    fn test_garbage_is_not_a_font() {
        assert!(LabelFont::from_bytes(b"definitely not a font".to_vec()).is_none());
    }

    #[test]
    fn test_label_has_ink_in_requested_color() {
        let label = render_label(&shipped_font(), "4.6", 16.0, WHITE);

        assert!(label.height() >= 12 && label.height() <= 32);
        assert!(!lit(&label).is_empty());
        for p in label.pixels().filter(|p| p[3] >= 128) {
            assert!(p[0] >= 240 && p[1] >= 240 && p[2] >= 240, "{p:?}");
        }
    }

    #[test]
    fn test_longer_text_is_wider() {
        let font = shipped_font();
        let short = render_label(&font, "4", 16.0, WHITE);
        let long = render_label(&font, "4.62", 16.0, WHITE);
        assert!(long.width() > short.width());
    }

    #[test]
    fn test_render_is_deterministic() {
        let font = shipped_font();
        assert_eq!(
            render_label(&font, "3.8", 16.0, WHITE),
            render_label(&font, "3.8", 16.0, WHITE)
        );
    }

    #[test]
    fn test_unpremultiply() {
        assert_eq!(unpremultiply([0, 0, 0, 0]), Rgba([0, 0, 0, 0]));
        assert_eq!(unpremultiply([128, 128, 128, 128]), Rgba([255, 255, 255, 128]));
        assert_eq!(unpremultiply([255, 0, 0, 255]), Rgba([255, 0, 0, 255]));
    }
}
