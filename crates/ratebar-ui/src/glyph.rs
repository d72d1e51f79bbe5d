//! Glyph sources: the item artwork a rating bar draws.
//!
//! The bar only needs two things from its artwork: an intrinsic size and a way
//! to draw itself into a square. [`GlyphSource`] captures exactly that, with
//! adapters for raster images, vector documents and plain painter closures.
//! Decoding stays with the host; adapters keep only a [`GlyphKey`] and a size.

use ratebar_engine::coords::{Rect, Vec2};
use ratebar_engine::paint::Color;
use ratebar_engine::scene::shapes::{GlyphKey, GlyphKind};

use crate::painter::Painter;

/// Artwork for one item variant.
pub trait GlyphSource: 'static {
    /// Natural size in logical pixels, used when no explicit extent is set.
    fn intrinsic_size(&self) -> Vec2;

    /// Draws into the square at `origin` with edge `extent`.
    ///
    /// `tint`, when present, recolors the glyph while keeping its coverage.
    fn draw(&self, painter: &mut Painter, origin: Vec2, extent: f32, tint: Option<Color>);
}

// ── BitmapGlyph ───────────────────────────────────────────────────────────

/// A decoded raster image registered with the renderer under `key`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BitmapGlyph {
    key: GlyphKey,
    size: Vec2,
}

impl BitmapGlyph {
    pub fn new(key: GlyphKey, width: u32, height: u32) -> Self {
        if width == 0 || height == 0 {
            log::warn!("bitmap glyph {key:?} is {width}x{height}; it will not be visible");
        }
        Self { key, size: Vec2::new(width as f32, height as f32) }
    }

    /// Takes the intrinsic size from an already decoded image.
    pub fn from_image<I: image::GenericImageView>(key: GlyphKey, image: &I) -> Self {
        let (w, h) = image.dimensions();
        Self::new(key, w, h)
    }

    #[inline]
    pub fn key(&self) -> GlyphKey {
        self.key
    }
}

impl GlyphSource for BitmapGlyph {
    fn intrinsic_size(&self) -> Vec2 {
        self.size
    }

    fn draw(&self, painter: &mut Painter, origin: Vec2, extent: f32, tint: Option<Color>) {
        painter.glyph(self.key, GlyphKind::Bitmap, Rect::square(origin, extent), tint);
    }
}

// ── VectorGlyph ───────────────────────────────────────────────────────────

/// A parsed SVG document registered with the renderer under `key`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorGlyph {
    key: GlyphKey,
    size: Vec2,
}

impl VectorGlyph {
    /// Takes the intrinsic size from the document's viewport.
    pub fn new(key: GlyphKey, tree: &resvg::usvg::Tree) -> Self {
        let size = tree.size();
        Self::with_size(key, Vec2::new(size.width(), size.height()))
    }

    pub fn with_size(key: GlyphKey, size: Vec2) -> Self {
        if !(size.is_finite() && size.x > 0.0 && size.y > 0.0) {
            log::warn!("vector glyph {key:?} has unusable size {size:?}");
        }
        Self { key, size }
    }

    #[inline]
    pub fn key(&self) -> GlyphKey {
        self.key
    }
}

impl GlyphSource for VectorGlyph {
    fn intrinsic_size(&self) -> Vec2 {
        self.size
    }

    fn draw(&self, painter: &mut Painter, origin: Vec2, extent: f32, tint: Option<Color>) {
        painter.glyph(self.key, GlyphKind::Vector, Rect::square(origin, extent), tint);
    }
}

// ── PainterGlyph ──────────────────────────────────────────────────────────

type PaintFn = dyn Fn(&mut Painter, Rect, Option<Color>);

/// Artwork drawn by a closure with the painter primitives.
pub struct PainterGlyph {
    size: Vec2,
    paint: Box<PaintFn>,
}

impl PainterGlyph {
    pub fn new(size: Vec2, paint: impl Fn(&mut Painter, Rect, Option<Color>) + 'static) -> Self {
        Self { size, paint: Box::new(paint) }
    }

    /// Five-pointed star filling its square in `color`. A tint replaces the color.
    pub fn star(color: Color) -> Self {
        Self::new(Vec2::splat(24.0), move |painter, rect, tint| {
            painter.fill_polygon(star_points(rect), tint.unwrap_or(color));
        })
    }
}

impl std::fmt::Debug for PainterGlyph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PainterGlyph").field("size", &self.size).finish_non_exhaustive()
    }
}

impl GlyphSource for PainterGlyph {
    fn intrinsic_size(&self) -> Vec2 {
        self.size
    }

    fn draw(&self, painter: &mut Painter, origin: Vec2, extent: f32, tint: Option<Color>) {
        (self.paint)(painter, Rect::square(origin, extent), tint);
    }
}

/// Outline of a five-pointed star inscribed in `rect`, point up.
pub fn star_points(rect: Rect) -> Vec<Vec2> {
    const INNER_RATIO: f32 = 0.382;
    let r = rect.size.x.min(rect.size.y) * 0.5;
    let center = rect.origin + rect.size * 0.5;
    (0..10)
        .map(|i| {
            let radius = if i % 2 == 0 { r } else { r * INNER_RATIO };
            let angle = -std::f32::consts::FRAC_PI_2 + i as f32 * std::f32::consts::PI / 5.0;
            center + Vec2::new(angle.cos(), angle.sin()) * radius
        })
        .collect()
}

// ── GlyphPair ─────────────────────────────────────────────────────────────

/// The two variants every bar needs: background ("empty") and foreground
/// ("filled") artwork.
pub struct GlyphPair {
    pub empty: Box<dyn GlyphSource>,
    pub filled: Box<dyn GlyphSource>,
}

impl GlyphPair {
    pub fn new(empty: impl GlyphSource, filled: impl GlyphSource) -> Self {
        Self { empty: Box::new(empty), filled: Box::new(filled) }
    }

    /// Painter-drawn stars: grey outline color for empty, amber for filled.
    pub fn stars() -> Self {
        Self::new(
            PainterGlyph::star(Color::from_rgb_hex(0xBDBDBD)),
            PainterGlyph::star(Color::amber()),
        )
    }

    /// The larger of the two variants' intrinsic sizes.
    pub fn intrinsic_size(&self) -> Vec2 {
        self.empty.intrinsic_size().max(self.filled.intrinsic_size())
    }
}

impl std::fmt::Debug for GlyphPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlyphPair")
            .field("intrinsic_size", &self.intrinsic_size())
            .finish_non_exhaustive()
    }
}
