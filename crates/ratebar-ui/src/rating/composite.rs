//! Turns a [`RatingFrame`] into painter calls.
//!
//! Partial fill is a masked composite inside one isolated layer:
//!
//! 1. filled glyph at every item origin
//! 2. transparent `SrcIn` rect over the empty region, clearing it
//! 3. empty glyph at every item origin, over everything
//! 4. fill shimmer: gradient over `[0, filled_width)` with `SrcIn`, so it
//!    only lands where glyphs already have coverage
//! 5. optionally the empty glyphs again, keeping their outline solid
//!
//! Border shimmer is a second layer: empty glyphs, then a gradient over the
//! whole bar with `SrcIn`.

use ratebar_engine::coords::{Rect, Vec2};
use ratebar_engine::paint::{BlendMode, Color, LinearGradient};

use crate::glyph::{GlyphPair, GlyphSource};
use crate::painter::Painter;

use super::fill::{FillGeometry, RatingFrame};
use super::shimmer::{self, GradientBand, ShimmerEffect};

/// Everything besides the frame that decides how a bar looks.
#[derive(Clone, Copy)]
pub struct RatingPaint<'a> {
    pub glyphs: &'a GlyphPair,
    /// Tint for the empty variant; `None` keeps the glyph's own colors.
    pub empty_tint: Option<Color>,
    /// Tint for the filled variant; `None` keeps the glyph's own colors.
    pub filled_tint: Option<Color>,
    pub shimmer: Option<&'a ShimmerEffect>,
}

impl<'a> RatingPaint<'a> {
    pub fn new(glyphs: &'a GlyphPair) -> Self {
        Self { glyphs, empty_tint: None, filled_tint: None, shimmer: None }
    }

    /// Paints `frame` with the bar's top-left corner at `origin`.
    pub fn paint(&self, painter: &mut Painter, origin: Vec2, frame: &RatingFrame) {
        let g = &frame.geometry;
        if g.item_extent <= 0.0 || g.item_origins.is_empty() {
            return;
        }
        let bar = Rect::new(origin.x, origin.y, g.total_width, g.item_extent);
        let phase = frame.shimmer.unwrap_or_default();

        painter.push_layer();
        draw_row(painter, self.glyphs.filled.as_ref(), origin, g, self.filled_tint);
        if g.empty_region_width > 0.0 {
            painter.fill_rect_with(
                bar.x_slice(g.empty_region_start, g.empty_region_width),
                Color::transparent(),
                BlendMode::SrcIn,
            );
        }
        draw_row(painter, self.glyphs.empty.as_ref(), origin, g, self.empty_tint);

        if let Some(fill) = self.shimmer.and_then(|s| s.fill.as_ref()) {
            if let Some(progress) = phase.fill_progress {
                if g.filled_width > 0.0 {
                    let band = shimmer::fill_band(g.filled_width, g.item_extent, progress);
                    sweep(
                        painter,
                        bar.x_slice(0.0, g.filled_width),
                        band.translate(origin),
                        &fill.colors,
                    );
                }
            }
            if fill.solid_border {
                draw_row(painter, self.glyphs.empty.as_ref(), origin, g, self.empty_tint);
            }
        }
        painter.pop_layer();

        let border = self
            .shimmer
            .and_then(|s| s.border.as_ref())
            .filter(|b| !b.colors.is_empty());
        if let (Some(border), Some(progress)) = (border, phase.border_progress) {
            painter.push_layer();
            draw_row(painter, self.glyphs.empty.as_ref(), origin, g, self.empty_tint);
            let band = shimmer::border_band(g.total_width, g.item_extent, progress);
            sweep(painter, bar, band.translate(origin), &border.colors);
            painter.pop_layer();
        }
    }
}

fn draw_row(
    painter: &mut Painter,
    glyph: &dyn GlyphSource,
    origin: Vec2,
    geometry: &FillGeometry,
    tint: Option<Color>,
) {
    for &x in &geometry.item_origins {
        glyph.draw(painter, Vec2::new(origin.x + x, origin.y), geometry.item_extent, tint);
    }
}

/// Gradient along `band`, kept only where the layer already has coverage.
fn sweep(painter: &mut Painter, area: Rect, band: GradientBand, colors: &[Color]) {
    match LinearGradient::evenly_spaced(band.start, band.end, colors) {
        Some(gradient) => painter.fill_rect_with(area, gradient, BlendMode::SrcIn),
        None => log::debug!("shimmer has no colors; skipped"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::BitmapGlyph;
    use crate::rating::fill::compute_fill;
    use crate::rating::shimmer::{BorderShimmer, FillShimmer, ShimmerPhase};
    use ratebar_engine::paint::Paint;
    use ratebar_engine::scene::shapes::{GlyphKey, GlyphKind};
    use ratebar_engine::scene::{DrawCmd, DrawList};

    const EMPTY: GlyphKey = GlyphKey(0);
    const FILLED: GlyphKey = GlyphKey(1);

    fn glyphs() -> GlyphPair {
        GlyphPair::new(BitmapGlyph::new(EMPTY, 40, 40), BitmapGlyph::new(FILLED, 40, 40))
    }

    fn frame(rating: f32, shimmer: Option<ShimmerPhase>) -> RatingFrame {
        RatingFrame { geometry: compute_fill(rating, 5, 40.0, 0.0), shimmer }
    }

    fn run(paint: RatingPaint, frame: &RatingFrame) -> Vec<DrawCmd> {
        let mut list = DrawList::new();
        {
            let mut p = Painter::new(&mut list, 1.0);
            paint.paint(&mut p, Vec2::new(10.0, 20.0), frame);
        }
        list.iter_in_paint_order().map(|i| i.cmd.clone()).collect()
    }

    /// Compact trace: `[`, `]`, `F`/`E` for glyphs, `x` for the clear, `g` for gradients.
    fn trace(cmds: &[DrawCmd]) -> String {
        cmds.iter()
            .map(|c| match c {
                DrawCmd::PushLayer => '[',
                DrawCmd::PopLayer => ']',
                DrawCmd::Glyph(g) if g.key == FILLED => 'F',
                DrawCmd::Glyph(_) => 'E',
                DrawCmd::Rect(r) if matches!(r.paint, Paint::LinearGradient(_)) => 'g',
                DrawCmd::Rect(_) => 'x',
                DrawCmd::Polygon(_) => 'p',
            })
            .collect()
    }

    // ── base composite ────────────────────────────────────────────────────

    #[test]
    fn partial_fill_clears_empty_region() {
        let pair = glyphs();
        let cmds = run(RatingPaint::new(&pair), &frame(2.5, None));
        assert_eq!(trace(&cmds), "[FFFFFxEEEEE]");

        let DrawCmd::Rect(clear) = &cmds[6] else { panic!("expected clear rect") };
        assert_eq!(clear.blend, BlendMode::SrcIn);
        assert_eq!(clear.paint, Paint::Solid(Color::transparent()));
        assert_eq!(clear.rect, Rect::new(110.0, 20.0, 100.0, 40.0));
    }

    #[test]
    fn full_bar_skips_clear() {
        let pair = glyphs();
        let cmds = run(RatingPaint::new(&pair), &frame(5.0, None));
        assert_eq!(trace(&cmds), "[FFFFFEEEEE]");
    }

    #[test]
    fn glyphs_sit_at_item_origins_with_tints() {
        let pair = glyphs();
        let tint = Color::from_rgb_hex(0x9E9E9E);
        let paint = RatingPaint { empty_tint: Some(tint), ..RatingPaint::new(&pair) };
        let cmds = run(paint, &frame(1.0, None));
        let rects: Vec<(GlyphKind, Rect, Option<Color>)> = cmds
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Glyph(g) if g.key == EMPTY => Some((g.kind, g.rect, g.tint)),
                _ => None,
            })
            .collect();
        assert_eq!(rects.len(), 5);
        assert_eq!(rects[3], (GlyphKind::Bitmap, Rect::new(130.0, 20.0, 40.0, 40.0), Some(tint)));
    }

    #[test]
    fn degenerate_frame_draws_nothing() {
        let pair = glyphs();
        let f = RatingFrame { geometry: compute_fill(3.0, 5, 0.0, 0.0), shimmer: None };
        assert!(run(RatingPaint::new(&pair), &f).is_empty());
    }

    // ── shimmer ───────────────────────────────────────────────────────────

    #[test]
    fn fill_shimmer_is_masked_to_filled_region() {
        let pair = glyphs();
        let effect = ShimmerEffect::default();
        let paint = RatingPaint { shimmer: Some(&effect), ..RatingPaint::new(&pair) };
        let phase = ShimmerPhase { fill_progress: Some(0.5), border_progress: None };
        let cmds = run(paint, &frame(2.5, Some(phase)));
        assert_eq!(trace(&cmds), "[FFFFFxEEEEEg]");

        let DrawCmd::Rect(r) = &cmds[12] else { panic!("expected gradient rect") };
        assert_eq!(r.blend, BlendMode::SrcIn);
        assert_eq!(r.rect, Rect::new(10.0, 20.0, 100.0, 40.0));
        let Paint::LinearGradient(grad) = &r.paint else { unreachable!() };
        // band: 100·0.5 − 40 → 100·0.5, offset by the bar origin
        assert_eq!(grad.start, Vec2::new(20.0, 30.0));
        assert_eq!(grad.end, Vec2::new(60.0, 70.0));
        assert_eq!(grad.stops.len(), 3);
    }

    #[test]
    fn solid_border_redraws_empty_glyphs() {
        let pair = glyphs();
        let effect = ShimmerEffect {
            fill: Some(FillShimmer { solid_border: true, ..FillShimmer::default() }),
            border: None,
        };
        let paint = RatingPaint { shimmer: Some(&effect), ..RatingPaint::new(&pair) };
        let phase = ShimmerPhase { fill_progress: Some(0.2), border_progress: None };
        let cmds = run(paint, &frame(5.0, Some(phase)));
        assert_eq!(trace(&cmds), "[FFFFFEEEEEgEEEEE]");
    }

    #[test]
    fn border_shimmer_is_a_second_layer() {
        let pair = glyphs();
        let effect = ShimmerEffect {
            fill: None,
            border: Some(BorderShimmer::new(vec![Color::amber(), Color::transparent()])),
        };
        let paint = RatingPaint { shimmer: Some(&effect), ..RatingPaint::new(&pair) };
        let phase = ShimmerPhase { fill_progress: None, border_progress: Some(1.0) };
        let cmds = run(paint, &frame(0.0, Some(phase)));
        assert_eq!(trace(&cmds), "[FFFFFxEEEEE][EEEEEg]");

        let DrawCmd::Rect(r) = &cmds[cmds.len() - 2] else { panic!("expected gradient rect") };
        assert_eq!(r.rect, Rect::new(10.0, 20.0, 200.0, 40.0));
    }

    #[test]
    fn shimmer_without_phase_is_not_drawn() {
        let pair = glyphs();
        let effect = ShimmerEffect::default();
        let paint = RatingPaint { shimmer: Some(&effect), ..RatingPaint::new(&pair) };
        let cmds = run(paint, &frame(2.0, None));
        assert_eq!(trace(&cmds), "[FFFFFxEEEEE]");
    }
}
