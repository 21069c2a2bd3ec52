//! Module implementing the render surface.

use std::fmt;
use std::sync::Arc;

use image::DynamicImage;

use model::{BannerConfig, Color, FontFamily, DEFAULT_DIMENSIONS};


/// The set of visual properties applied to the surface.
///
/// This is a plain projection of `BannerConfig` — see `Style::project` —
/// with dimensions resolved down to whole pixels and the background image
/// down to a shared pixel handle.
#[derive(Clone)]
pub struct Style {
    /// Applied canvas width, in pixels. Never zero.
    pub width: u32,
    /// Applied canvas height, in pixels. Never zero.
    pub height: u32,
    /// The background color layer.
    pub background_color: Color,
    /// The background image layer, covering the color when present.
    pub background_image: Option<Arc<DynamicImage>>,
    /// Color of the banner text.
    pub font_color: Color,
    /// Size of the banner text, in pixels.
    pub font_size: f32,
    /// Font family of the banner text.
    pub font_family: FontFamily,
}

impl Style {
    /// Compute the style properties for given config.
    ///
    /// This is a pure function of the config, except for one guard:
    /// a config whose dimensions cannot be displayed keeps the previously
    /// applied dimensions on the surface (or the model defaults when there
    /// is nothing applied yet).
    pub fn project(config: &BannerConfig, previous: Option<&Style>) -> Style {
        let (width, height) = config.dimensions().to_pixels().unwrap_or_else(|| {
            warn!("Not applying non-displayable dimensions: {}", config.dimensions());
            match previous {
                Some(style) => (style.width, style.height),
                // The defaults are always displayable.
                None => DEFAULT_DIMENSIONS.to_pixels().unwrap(),
            }
        });

        Style{
            width: width,
            height: height,
            background_color: config.background_color(),
            background_image: config.background_image().map(|image| image.pixels()),
            font_color: config.font_color(),
            font_size: config.font_size(),
            font_family: config.font_family(),
        }
    }
}

impl fmt::Debug for Style {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("Style")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("background_color", &self.background_color)
            .field("background_image", &self.background_image.as_ref().map(|_| "..."))
            .field("font_color", &self.font_color)
            .field("font_size", &self.font_size)
            .field("font_family", &self.font_family)
            .finish()
    }
}


/// The live region that visually reflects the banner config.
///
/// The surface holds the *applied* style — the one the user is looking
/// at — which trails the config until `sync` is called. Text is special:
/// the surface is directly editable, so model-driven text lands here only
/// when it was actually replaced through the model (initial mount,
/// text-change and random-wording events), never on every sync.
pub struct Surface {
    style: Style,
    text: String,
    applied_revision: u64,
    applied_text_revision: u64,
}

impl Surface {
    /// Create a surface displaying given config.
    pub fn mount(config: &BannerConfig) -> Self {
        Surface{
            style: Style::project(config, None),
            text: config.text().to_owned(),
            applied_revision: config.revision(),
            applied_text_revision: config.text_revision(),
        }
    }

    /// Re-apply the config to the surface.
    ///
    /// The full style set is recomputed and swapped in at once,
    /// so observers can never see a half-applied change.
    pub fn sync(&mut self, config: &BannerConfig) {
        if config.revision() == self.applied_revision {
            trace!("Surface already settled at revision {}", self.applied_revision);
            return;
        }
        debug!("Syncing surface: revision {} -> {}",
            self.applied_revision, config.revision());

        self.style = Style::project(config, Some(&self.style));
        if config.text_revision() != self.applied_text_revision {
            self.text = config.text().to_owned();
            self.applied_text_revision = config.text_revision();
        }
        self.applied_revision = config.revision();
    }

    /// Replace the surface text in place, as the user's cursor would.
    ///
    /// This bypasses the model entirely; callers that want the model to
    /// keep up should go through `Studio::edit_text` instead.
    pub fn edit_text<S: Into<String>>(&mut self, text: S) {
        self.text = text.into();
    }

    /// The currently applied style.
    #[inline]
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// The currently displayed text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the surface reflects the latest config revision.
    pub fn is_settled(&self, config: &BannerConfig) -> bool {
        config.revision() == self.applied_revision
    }
}

impl fmt::Debug for Surface {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("Surface")
            .field("style", &self.style)
            .field("text", &self.text)
            .field("applied_revision", &self.applied_revision)
            .finish()
    }
}
