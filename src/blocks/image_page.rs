//! One photograph per page, or an error caption in its place.

use super::{BlockContext, LINE_HEIGHT};
use crate::image_loader::{ImageError, ImageResolver};
use crate::layout::fit::{fit, BoundingBox};
use crate::layout::{Cursor, Surface};
use crate::style::{Color, TextStyle};

/// Distance from the top margin to the top of the photo area.
pub const IMAGE_TOP_OFFSET: u32 = 50;

pub fn caption(k: usize, n: usize) -> String {
    format!("Image {} of {}", k, n)
}

pub fn failure_caption(error: &ImageError) -> String {
    format!("Image could not be loaded: {}", error)
}

/// The box photos are fitted into: full content width, from the fixed top
/// offset down to the bottom margin.
pub fn photo_bound(ctx: &BlockContext) -> BoundingBox {
    let geometry = &ctx.geometry;
    let top = geometry.margin_top + IMAGE_TOP_OFFSET;
    BoundingBox {
        left: geometry.margin_left,
        top,
        width: geometry.width.saturating_sub(geometry.margin_left + geometry.margin_right),
        height: geometry.content_bottom().saturating_sub(top),
    }
}

/// Draw image `k` of `n` on a page the caller has just opened.
///
/// Resolution and fitting failures never escape: they become a red caption
/// at the photo position and the page is still produced.
pub fn render_image_page(
    ctx: &BlockContext,
    surface: &mut Surface,
    cursor: Cursor,
    resolver: &dyn ImageResolver,
    reference: &str,
    k: usize,
    n: usize,
) -> Cursor {
    let style = TextStyle::CAPTION;
    surface.draw_text(ctx.left(), cursor.top() + style.size, caption(k, n), style);

    let bound = photo_bound(ctx);
    let placed = resolver.resolve(reference).and_then(|image| {
        let fitted = fit(image.width_px, image.height_px, &bound)?;
        Ok((image, fitted))
    });

    match placed {
        Ok((image, fitted)) => {
            surface.draw_image(
                fitted.left as f64,
                fitted.top as f64,
                fitted.width as f64,
                fitted.height as f64,
                image,
            );
            Cursor::at(fitted.top + fitted.height).max(cursor)
        }
        Err(error) => {
            log::warn!("image {k} of {n} ({reference}) falls back to an error page: {error}");
            let error_style = TextStyle::BODY.with_color(Color::RISK_HIGH);
            let lines = ctx.wrap(&failure_caption(&error), &error_style, ctx.content_width());
            super::draw_lines(
                surface,
                ctx.left(),
                Cursor::at(bound.top),
                &lines,
                error_style,
                LINE_HEIGHT,
            )
            .max(cursor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FontContext;
    use crate::image_loader::{ImagePixelData, LoadedImage};
    use crate::layout::{DrawCommand, PageGeometry};

    struct Fixed(Result<(u32, u32), ImageError>);

    impl ImageResolver for Fixed {
        fn resolve(&self, _: &str) -> Result<LoadedImage, ImageError> {
            self.0.clone().map(|(w, h)| LoadedImage {
                pixel_data: ImagePixelData::Decoded {
                    rgb: vec![0; (w * h * 3) as usize],
                    alpha: None,
                },
                width_px: w,
                height_px: h,
            })
        }
    }

    fn render(resolver: &Fixed) -> Vec<DrawCommand> {
        let fc = FontContext::new();
        let geometry = PageGeometry::default();
        let ctx = BlockContext::new(&fc, geometry);
        let mut surface = Surface::new(&geometry);
        render_image_page(&ctx, &mut surface, Cursor::at(50), resolver, "content://a", 2, 3);
        surface.commands().to_vec()
    }

    #[test]
    fn default_bound() {
        let fc = FontContext::new();
        let ctx = BlockContext::new(&fc, PageGeometry::default());
        assert_eq!(
            photo_bound(&ctx),
            BoundingBox {
                left: 40,
                top: 100,
                width: 515,
                height: 692
            }
        );
    }

    #[test]
    fn image_is_centred_below_caption() {
        let commands = render(&Fixed(Ok((40, 80))));
        match &commands[0] {
            DrawCommand::Text { text, .. } => assert_eq!(text, "Image 2 of 3"),
            other => panic!("expected caption, got {other:?}"),
        }
        match &commands[1] {
            DrawCommand::Image { x, y, width, height, .. } => {
                assert_eq!((*width, *height), (346.0, 692.0));
                assert_eq!(*x, 40.0 + ((515.0 - 346.0) / 2.0f64).floor());
                assert_eq!(*y, 100.0);
            }
            other => panic!("expected image, got {other:?}"),
        }
    }

    #[test]
    fn failure_draws_reason() {
        let commands = render(&Fixed(Err(ImageError::Unavailable("offline".into()))));
        assert_eq!(commands.len(), 2);
        match &commands[1] {
            DrawCommand::Text { text, style, y, .. } => {
                assert_eq!(text, "Image could not be loaded: image source unavailable: offline");
                assert_eq!(style.color, Color::RISK_HIGH);
                assert_eq!(*y, 112.0);
            }
            other => panic!("expected error caption, got {other:?}"),
        }
    }

    #[test]
    fn zero_dimension_becomes_error_page() {
        let commands = render(&Fixed(Ok((0, 10))));
        assert!(commands.iter().all(|c| !matches!(c, DrawCommand::Image { .. })));
        assert!(matches!(&commands[1], DrawCommand::Text { text, .. } if text.contains("zero dimension")));
    }
}
