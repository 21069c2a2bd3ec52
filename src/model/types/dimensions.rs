//! Module defining the banner dimensions type.

use std::fmt;

use float_ord::FloatOrd;


/// Dimensions of the banner canvas, in CSS pixels.
///
/// Values come from free-form numeric inputs, so they are stored as given;
/// whether they can actually be displayed is decided by the rendering
/// surface (see `Dimensions::to_pixels`).
#[derive(Clone, Copy, Debug)]
pub struct Dimensions {
    /// Width of the banner.
    pub width: f32,
    /// Height of the banner.
    pub height: f32,
}

impl Dimensions {
    #[inline]
    pub fn new(width: f32, height: f32) -> Self {
        Dimensions{width, height}
    }

    /// Multiply both dimensions by a scalar factor.
    #[inline]
    pub fn scale(self, factor: f32) -> Self {
        Dimensions::new(self.width * factor, self.height * factor)
    }

    /// Whether the dimensions describe a displayable (non-degenerate) canvas.
    pub fn is_displayable(&self) -> bool {
        self.width.is_finite() && self.width > 0.0 &&
        self.height.is_finite() && self.height > 0.0
    }

    /// Project the dimensions onto a whole-pixel raster size.
    ///
    /// Returns `None` for canvases that cannot be displayed
    /// (zero, negative, or non-finite extents).
    pub fn to_pixels(&self) -> Option<(u32, u32)> {
        if !self.is_displayable() {
            return None;
        }
        let width = self.width.round() as u32;
        let height = self.height.round() as u32;
        if width == 0 || height == 0 {
            return None;
        }
        Some((width, height))
    }
}

impl PartialEq for Dimensions {
    fn eq(&self, other: &Self) -> bool {
        FloatOrd(self.width).eq(&FloatOrd(other.width)) &&
        FloatOrd(self.height).eq(&FloatOrd(other.height))
    }
}
impl Eq for Dimensions {}

impl fmt::Display for Dimensions {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}x{}", self.width, self.height)
    }
}
