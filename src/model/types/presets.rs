//! Module defining the aspect-ratio presets.

use std::fmt;

use super::dimensions::Dimensions;


macro_attr! {
    /// Aspect-ratio shortcut for the banner canvas.
    ///
    /// Selecting a preset replaces both dimensions at once
    /// with a fixed pair tailored to the target platform.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash,
             Deserialize, IterVariants!(AspectPresets))]
    #[serde(rename_all = "lowercase")]
    pub enum AspectPreset {
        /// Landscape 16:9 canvas.
        Wide,
        /// Portrait 9:16 canvas, for vertical video covers.
        Tall,
        /// YouTube thumbnail canvas.
        Youtube,
    }
}

impl AspectPreset {
    /// The canvas dimensions this preset stands for.
    pub fn dimensions(&self) -> Dimensions {
        match *self {
            AspectPreset::Wide => Dimensions::new(960.0, 540.0),
            AspectPreset::Tall => Dimensions::new(360.0, 640.0),
            AspectPreset::Youtube => Dimensions::new(1280.0, 720.0),
        }
    }
}

impl fmt::Display for AspectPreset {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            AspectPreset::Wide => write!(fmt, "16:9"),
            AspectPreset::Tall => write!(fmt, "9:16"),
            AspectPreset::Youtube => write!(fmt, "YouTube"),
        }
    }
}
