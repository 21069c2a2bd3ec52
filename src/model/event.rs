//! Module defining the input events consumed by the state model.
//!
//! The UI widgets themselves (inputs, buttons, pickers, the file dialog)
//! live in the host shell; all the model sees is this event vocabulary.

use rand::Rng;

use resources::BackgroundImage;
use super::types::{AspectPreset, BannerConfig, Color, ImageRef, Picker};


/// A configuration change emitted by one of the UI controls.
///
/// Events deserialize from tagged maps, e.g.:
/// `{"type": "background_color_change", "color": "#00ff00"}`.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// The text input changed.
    TextChange { text: String },
    /// The width input changed. The raw input string is carried as-is.
    WidthChange { value: String },
    /// The height input changed. The raw input string is carried as-is.
    HeightChange { value: String },
    /// An aspect-ratio preset button was pressed.
    RatioPreset { preset: AspectPreset },
    /// A scale-factor preset button was pressed.
    ScalePreset { factor: f32 },
    /// A color was chosen in the background color picker.
    BackgroundColorChange { color: Color },
    /// A color was chosen in the font color picker.
    FontColorChange { color: Color },
    /// The font size input changed. The raw input string is carried as-is.
    FontSizeChange { value: String },
    /// A font family was chosen in the select control.
    FontFamilySelect { family: String },
    /// An image was picked for the background.
    BackgroundImageUpload { image: ImageRef },
    /// The "random color" button was pressed.
    RandomizeColor,
    /// The "random words" button was pressed.
    RandomizeText,
    /// A color-picker popover was opened or closed.
    PickerToggle { picker: Picker, open: bool },
}

impl Event {
    /// Apply the event to the state model.
    ///
    /// Mirrors the model's own failure policy: out-of-domain input
    /// is logged and dropped, never surfaced as an error.
    pub fn apply_to<R: Rng>(self, config: &mut BannerConfig, rng: &mut R) {
        trace!("Applying {:?}", self);
        match self {
            Event::TextChange{text} => config.set_text(text),
            Event::WidthChange{value} => config.set_width(&value),
            Event::HeightChange{value} => config.set_height(&value),
            Event::RatioPreset{preset} => config.set_ratio(preset),
            Event::ScalePreset{factor} => config.scale_by(factor),
            Event::BackgroundColorChange{color} => config.set_background_color(color),
            Event::FontColorChange{color} => config.set_font_color(color),
            Event::FontSizeChange{value} => {
                match value.trim().parse::<f32>() {
                    Ok(size) => config.set_font_size(size),
                    Err(_) => warn!("Ignoring unparsable font size input: {:?}", value),
                }
            }
            Event::FontFamilySelect{family} => config.set_font_family_name(&family),
            Event::BackgroundImageUpload{image} => {
                match BackgroundImage::load(&image) {
                    Ok(background) => config.set_background_image(background),
                    // The previous background (color or image) stays visible.
                    Err(e) => warn!("Cannot load background image {}: {}", image, e),
                }
            }
            Event::RandomizeColor => config.randomize_background_color(rng),
            Event::RandomizeText => config.randomize_text(rng),
            Event::PickerToggle{picker, open} => config.toggle_picker(picker, open),
        }
    }
}
