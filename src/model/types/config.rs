//! Module implementing the banner state model.

use std::fmt;

use rand::Rng;

use model::constants::{DEFAULT_DIMENSIONS, DEFAULT_FONT_COLOR, DEFAULT_FONT_SIZE,
                       DEFAULT_FONT_FAMILY, PRESET_TEXTS};
use resources::BackgroundImage;
use super::color::Color;
use super::dimensions::Dimensions;
use super::font::FontFamily;
use super::presets::AspectPreset;


/// Identifies one of the two color-picker popovers.
///
/// The flags are independent; the model does not enforce that
/// only one picker is open at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Picker {
    /// Picker for the text color.
    FontColor,
    /// Picker for the background color.
    BackgroundColor,
}


/// The complete set of user-controllable banner parameters.
///
/// A single instance is created per session, with a random preset text
/// and a random background color, and is then mutated field by field
/// through the operations below. Out-of-domain input never fails loudly:
/// it is logged and the prior value retained.
///
/// Every accepted mutation advances `revision`; text replacement
/// additionally advances `text_revision`, which is what lets the render
/// surface re-apply text only when it was actually replaced
/// (the surface text is also edited directly by the user, see `Surface`).
pub struct BannerConfig {
    text: String,
    dimensions: Dimensions,
    background_color: Color,
    background_image: Option<BackgroundImage>,
    font_color: Color,
    font_size: f32,
    font_family: FontFamily,
    color_picker_open: bool,
    bg_color_picker_open: bool,
    revision: u64,
    text_revision: u64,
}

impl BannerConfig {
    /// Create the config with defaulted & randomized initial values.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let mut config = BannerConfig{
            text: String::new(),
            dimensions: DEFAULT_DIMENSIONS,
            background_color: Color::black(),
            background_image: None,
            font_color: DEFAULT_FONT_COLOR,
            font_size: DEFAULT_FONT_SIZE,
            font_family: DEFAULT_FONT_FAMILY,
            color_picker_open: false,
            bg_color_picker_open: false,
            revision: 0,
            text_revision: 0,
        };
        config.randomize_background_color(rng);
        config.randomize_text(rng);
        config
    }
}

// Read access.
impl BannerConfig {
    /// The banner text, as last replaced through the model.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Canvas dimensions, as last entered.
    ///
    /// These are stored as given and may be non-displayable;
    /// the render surface decides what actually gets applied.
    #[inline]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// The background color.
    ///
    /// Always defined, even while a background image covers it.
    #[inline]
    pub fn background_color(&self) -> Color {
        self.background_color
    }

    /// The background image, if one is set.
    #[inline]
    pub fn background_image(&self) -> Option<&BackgroundImage> {
        self.background_image.as_ref()
    }

    /// Color of the banner text.
    #[inline]
    pub fn font_color(&self) -> Color {
        self.font_color
    }

    /// Size of the banner text, in pixels.
    #[inline]
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Font family of the banner text.
    #[inline]
    pub fn font_family(&self) -> FontFamily {
        self.font_family
    }

    /// Whether given color-picker popover is open.
    pub fn is_picker_open(&self, which: Picker) -> bool {
        match which {
            Picker::FontColor => self.color_picker_open,
            Picker::BackgroundColor => self.bg_color_picker_open,
        }
    }

    /// Counter advanced by every accepted mutation.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Counter advanced only by text replacement
    /// (not by text adopted back from direct surface edits).
    #[inline]
    pub fn text_revision(&self) -> u64 {
        self.text_revision
    }
}

// Mutations.
impl BannerConfig {
    /// Replace the banner text.
    ///
    /// Any string is accepted, including empty and multi-line content;
    /// it is stored literally.
    pub fn set_text<S: Into<String>>(&mut self, text: S) {
        self.text = text.into();
        self.text_revision += 1;
        self.bump();
    }

    /// Record text captured from a direct edit of the render surface.
    ///
    /// Unlike `set_text` this does not advance `text_revision`:
    /// the surface already displays the text, so re-applying it
    /// would be redundant.
    pub fn adopt_text<S: Into<String>>(&mut self, text: S) {
        self.text = text.into();
        self.bump();
    }

    /// Set the canvas width from a numeric form input.
    ///
    /// Unparsable input is ignored.
    pub fn set_width(&mut self, input: &str) {
        match parse_dimension(input) {
            Some(width) => {
                self.dimensions.width = width;
                self.bump();
            }
            None => warn!("Ignoring unparsable width input: {:?}", input),
        }
    }

    /// Set the canvas height from a numeric form input.
    ///
    /// Unparsable input is ignored.
    pub fn set_height(&mut self, input: &str) {
        match parse_dimension(input) {
            Some(height) => {
                self.dimensions.height = height;
                self.bump();
            }
            None => warn!("Ignoring unparsable height input: {:?}", input),
        }
    }

    /// Replace both canvas dimensions with an aspect-ratio preset.
    ///
    /// Both fields change under a single revision,
    /// so no observer can see a half-applied pair.
    pub fn set_ratio(&mut self, preset: AspectPreset) {
        debug!("Applying aspect preset {} -> {}", preset, preset.dimensions());
        self.dimensions = preset.dimensions();
        self.bump();
    }

    /// Multiply both canvas dimensions by a positive factor.
    pub fn scale_by(&mut self, factor: f32) {
        if !(factor.is_finite() && factor > 0.0) {
            warn!("Ignoring invalid scale factor: {}", factor);
            return;
        }
        self.dimensions = self.dimensions.scale(factor);
        self.bump();
    }

    /// Set the background color.
    ///
    /// Clears any background image: at most one of the two is ever
    /// the effective visible background, and color wins over a stale image.
    pub fn set_background_color(&mut self, color: Color) {
        if self.background_image.take().is_some() {
            debug!("Background color change displaces the background image");
        }
        self.background_color = color;
        self.bump();
    }

    /// Set the background image.
    ///
    /// The background color is kept as the fallback layer underneath.
    pub fn set_background_image(&mut self, image: BackgroundImage) {
        debug!("Background image set: {:?}", image);
        self.background_image = Some(image);
        self.bump();
    }

    /// Set the color of the banner text.
    pub fn set_font_color(&mut self, color: Color) {
        self.font_color = color;
        self.bump();
    }

    /// Set the size of the banner text.
    ///
    /// Non-positive or non-finite sizes are ignored.
    pub fn set_font_size(&mut self, size: f32) {
        if !(size.is_finite() && size > 0.0) {
            warn!("Ignoring invalid font size: {}", size);
            return;
        }
        self.font_size = size;
        self.bump();
    }

    /// Set the font family of the banner text.
    pub fn set_font_family(&mut self, family: FontFamily) {
        self.font_family = family;
        self.bump();
    }

    /// Set the font family by its user-facing name.
    ///
    /// Names outside the supported set are ignored.
    pub fn set_font_family_name(&mut self, name: &str) {
        match name.parse::<FontFamily>() {
            Ok(family) => self.set_font_family(family),
            Err(e) => warn!("Ignoring font family selection: {}", e),
        }
    }

    /// Set the background to a random color.
    ///
    /// Goes through `set_background_color`,
    /// so a background image is displaced just the same.
    pub fn randomize_background_color<R: Rng>(&mut self, rng: &mut R) {
        let color = Color::random(rng);
        debug!("Randomized background color: {}", color);
        self.set_background_color(color);
    }

    /// Replace the text with a randomly chosen preset wording.
    pub fn randomize_text<R: Rng>(&mut self, rng: &mut R) {
        // The preset list is non-empty, so choose() cannot come up short.
        let text = rng.choose(PRESET_TEXTS).unwrap_or(&PRESET_TEXTS[0]);
        debug!("Randomized text: {:?}", text);
        self.set_text(*text);
    }

    /// Open or close one of the color-picker popovers.
    pub fn toggle_picker(&mut self, which: Picker, open: bool) {
        match which {
            Picker::FontColor => self.color_picker_open = open,
            Picker::BackgroundColor => self.bg_color_picker_open = open,
        }
        self.bump();
    }

    #[inline]
    fn bump(&mut self) {
        self.revision += 1;
    }
}

impl fmt::Debug for BannerConfig {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let mut ds = fmt.debug_struct("BannerConfig");
        ds.field("text", &self.text);
        ds.field("dimensions", &self.dimensions);
        ds.field("background_color", &self.background_color);
        if let Some(ref image) = self.background_image {
            ds.field("background_image", image);
        }
        ds.field("font_color", &self.font_color);
        ds.field("font_size", &self.font_size);
        ds.field("font_family", &self.font_family);
        ds.field("revision", &self.revision);
        ds.finish()
    }
}


/// Parse a numeric-shaped dimension input.
fn parse_dimension(input: &str) -> Option<f32> {
    // Whatever parses is stored, displayable or not;
    // the render surface refuses to apply degenerate values.
    input.trim().parse::<f32>().ok()
}


#[cfg(test)]
mod tests {
    use image::{DynamicImage, ImageBuffer};
    use rand::{SeedableRng, StdRng};

    use model::{Color, Dimensions, FontFamily, ImageRef, Picker,
                AspectPreset, DEFAULT_FONT_SIZE, PRESET_TEXTS};
    use resources::BackgroundImage;
    use super::BannerConfig;

    fn rng() -> StdRng {
        StdRng::from_seed(&[42])
    }

    fn config() -> BannerConfig {
        BannerConfig::new(&mut rng())
    }

    fn some_image() -> BackgroundImage {
        let pixels = ImageBuffer::from_pixel(2, 2, Color(0, 0xff, 0).to_rgba(0xff));
        BackgroundImage::from_image(
            ImageRef::Path("test.png".into()), DynamicImage::ImageRgba8(pixels))
    }

    #[test]
    fn initial_state() {
        let config = config();
        assert!(PRESET_TEXTS.iter().any(|&t| t == config.text()));
        assert_eq!(Dimensions::new(960.0, 540.0), config.dimensions());
        assert_eq!(Color::white(), config.font_color());
        assert_eq!(DEFAULT_FONT_SIZE, config.font_size());
        assert_eq!(FontFamily::EastSeaDokdo, config.font_family());
        assert!(config.background_image().is_none());
        assert!(!config.is_picker_open(Picker::FontColor));
        assert!(!config.is_picker_open(Picker::BackgroundColor));
    }

    #[test]
    fn deterministic_with_the_same_seed() {
        let a = BannerConfig::new(&mut rng());
        let b = BannerConfig::new(&mut rng());
        assert_eq!(a.text(), b.text());
        assert_eq!(a.background_color(), b.background_color());
    }

    #[test]
    fn text_is_stored_literally() {
        let mut config = config();
        config.set_text("line one\nline two\n");
        assert_eq!("line one\nline two\n", config.text());
        config.set_text("");
        assert_eq!("", config.text());
    }

    #[test]
    fn dimension_inputs_are_parsed_or_ignored() {
        let mut config = config();
        config.set_width("320");
        config.set_height(" 200 ");
        assert_eq!(Dimensions::new(320.0, 200.0), config.dimensions());

        let before = config.revision();
        config.set_width("lots");
        config.set_height("");
        assert_eq!(Dimensions::new(320.0, 200.0), config.dimensions());
        assert_eq!(before, config.revision());
    }

    #[test]
    fn ratio_presets_replace_both_dimensions_atomically() {
        let mut config = config();
        let before = config.revision();
        config.set_ratio(AspectPreset::Tall);
        assert_eq!(Dimensions::new(360.0, 640.0), config.dimensions());
        // A single revision covers both axes.
        assert_eq!(before + 1, config.revision());
    }

    #[test]
    fn scaling_composes_and_rejects_garbage() {
        let mut config = config();
        config.set_ratio(AspectPreset::Wide);

        config.scale_by(0.5);
        config.scale_by(1.5);
        let stepwise = config.dimensions();

        config.set_ratio(AspectPreset::Wide);
        config.scale_by(0.5 * 1.5);
        assert_eq!(stepwise, config.dimensions());

        let before = config.dimensions();
        config.scale_by(0.0);
        config.scale_by(-2.0);
        config.scale_by(::std::f32::NAN);
        assert_eq!(before, config.dimensions());
    }

    #[test]
    fn background_color_displaces_the_image() {
        let mut config = config();
        config.set_background_image(some_image());
        assert!(config.background_image().is_some());

        config.set_background_color(Color::black());
        assert!(config.background_image().is_none());
        assert_eq!(Color::black(), config.background_color());

        // And the image can come right back, color staying put.
        config.set_background_image(some_image());
        assert!(config.background_image().is_some());
        assert_eq!(Color::black(), config.background_color());
    }

    #[test]
    fn randomized_background_color_displaces_the_image_too() {
        let mut config = config();
        config.set_background_image(some_image());
        config.randomize_background_color(&mut rng());
        assert!(config.background_image().is_none());
    }

    #[test]
    fn font_constraints() {
        let mut config = config();

        config.set_font_size(64.0);
        assert_eq!(64.0, config.font_size());
        config.set_font_size(0.0);
        config.set_font_size(-12.0);
        assert_eq!(64.0, config.font_size());

        config.set_font_family_name("Lobster");
        assert_eq!(FontFamily::Lobster, config.font_family());
        config.set_font_family_name("Nonexistent Font");
        assert_eq!(FontFamily::Lobster, config.font_family());
    }

    #[test]
    fn adopted_text_does_not_advance_text_revision() {
        let mut config = config();
        let text_rev = config.text_revision();
        let rev = config.revision();

        config.adopt_text("typed right into the surface");
        assert_eq!("typed right into the surface", config.text());
        assert_eq!(text_rev, config.text_revision());
        assert_eq!(rev + 1, config.revision());

        config.set_text("replaced wholesale");
        assert_eq!(text_rev + 1, config.text_revision());
    }

    #[test]
    fn picker_flags_are_independent() {
        let mut config = config();
        config.toggle_picker(Picker::FontColor, true);
        config.toggle_picker(Picker::BackgroundColor, true);
        assert!(config.is_picker_open(Picker::FontColor));
        assert!(config.is_picker_open(Picker::BackgroundColor));

        config.toggle_picker(Picker::FontColor, false);
        assert!(!config.is_picker_open(Picker::FontColor));
        assert!(config.is_picker_open(Picker::BackgroundColor));
    }
}
