//! Module implementing the banner studio: a whole editing session.

use std::path::Path;

use rand::{Rng, ThreadRng, self};

use model::{BannerConfig, Event};
use render::{Engine, ExportArtifact, ExportError, Surface};
use resources::{Font, FontLoader, Loader};


/// A banner editing session.
///
/// Ties together the state model, the render surface and the export
/// engine: input events go through the model and are immediately
/// projected onto the surface, so that by the time anything observes
/// the surface (the user, or an export) it reflects the latest config.
///
/// The random source used for the initial state and the randomize
/// shortcuts is injected, which keeps sessions reproducible under test.
pub struct Studio<Fl = FontLoader, R = ThreadRng>
    where Fl: Loader<Item=Font>, R: Rng
{
    config: BannerConfig,
    surface: Surface,
    engine: Engine<Fl>,
    rng: R,
}

impl Studio<FontLoader, ThreadRng> {
    /// Start a session with fonts loaded from given directory.
    pub fn new<D: AsRef<Path>>(font_directory: D) -> Self {
        Self::with_engine(Engine::new(font_directory), rand::thread_rng())
    }
}

impl<Fl, R> Studio<Fl, R>
    where Fl: Loader<Item=Font>, R: Rng
{
    /// Start a session around given engine & random source.
    ///
    /// The initial banner gets a random preset text
    /// and a random background color, both drawn from `rng`.
    pub fn with_engine(engine: Engine<Fl>, mut rng: R) -> Self {
        let config = BannerConfig::new(&mut rng);
        let surface = Surface::mount(&config);
        debug!("Studio session started: {:?}", config);
        Studio{config, surface, engine, rng}
    }
}

// Read access.
impl<Fl, R> Studio<Fl, R>
    where Fl: Loader<Item=Font>, R: Rng
{
    /// The banner configuration.
    #[inline]
    pub fn config(&self) -> &BannerConfig {
        &self.config
    }

    /// The render surface, as the user currently sees it.
    #[inline]
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// The export engine.
    #[inline]
    pub fn engine(&self) -> &Engine<Fl> {
        &self.engine
    }
}

// Driving the session.
impl<Fl, R> Studio<Fl, R>
    where Fl: Loader<Item=Font>, R: Rng
{
    /// Route an input event through the model and onto the surface.
    pub fn handle(&mut self, event: Event) {
        event.apply_to(&mut self.config, &mut self.rng);
        self.surface.sync(&self.config);
    }

    /// Mutable access to the model, for hosts that call operations directly.
    ///
    /// The surface catches up on the next `handle` or `export` call.
    #[inline]
    pub fn config_mut(&mut self) -> &mut BannerConfig {
        &mut self.config
    }

    /// Record the user editing the surface text in place.
    ///
    /// The surface shows the text immediately and the model adopts it,
    /// so the two never diverge (in-place edits survive unrelated
    /// configuration changes and show up in exports).
    pub fn edit_text<S: Into<String>>(&mut self, text: S) {
        let text = text.into();
        self.surface.edit_text(text.clone());
        self.config.adopt_text(text);
    }

    /// Export the banner as it currently looks.
    ///
    /// Any configuration change from this same turn is projected onto
    /// the surface before capture, so the artifact always reflects
    /// the latest state.
    pub fn export(&mut self) -> Result<ExportArtifact, ExportError<Fl>> {
        self.surface.sync(&self.config);
        self.engine.rasterize(&self.surface)
    }
}


#[cfg(test)]
mod tests {
    use image::{self, GenericImage};
    use rand::{SeedableRng, StdRng};

    use model::{Color, Event, ImageRef};
    use render::{Engine, ExportError};
    use resources::{Font, FontError, Loader};
    use super::Studio;

    /// A font loader for a host with no font files at all.
    struct NoFonts;
    impl Loader for NoFonts {
        type Item = Font;
        type Err = FontError;
        fn load<'n>(&self, _: &'n str) -> Result<Font, FontError> {
            Err(FontError::NoFaces)
        }
    }

    fn studio() -> Studio<NoFonts, StdRng> {
        Studio::with_engine(Engine::with_raw_loader(NoFonts), StdRng::from_seed(&[4, 8, 15]))
    }

    /// Encode a tiny solid-color PNG and wrap it like the upload flow would.
    fn uploaded_image(color: Color) -> ImageRef {
        use image::DynamicImage;
        use image::png::PNGEncoder;
        let img = DynamicImage::ImageRgba8(
            image::ImageBuffer::from_pixel(4, 4, color.to_rgba(0xff)));
        let mut bytes = Vec::new();
        PNGEncoder::new(&mut bytes)
            .encode(&img.raw_pixels(), 4, 4, img.color())
            .unwrap();
        ImageRef::from_bytes("image/png", bytes)
    }

    #[test]
    fn initial_session_exports_out_of_the_box() {
        let mut studio = studio();
        // No bundled fonts in this rig, so drop the preset text first.
        studio.handle(Event::TextChange{text: String::new()});

        let background = studio.config().background_color();
        let artifact = studio.export().unwrap();
        assert_eq!("banner-sample.png", artifact.file_name());
        assert_eq!((960, 540), artifact.dimensions());

        let decoded = image::load_from_memory(&artifact).unwrap();
        assert_eq!((960, 540), decoded.dimensions());
        assert_eq!(background.to_rgba(0xff), decoded.get_pixel(0, 0));
    }

    #[test]
    fn export_observes_the_latest_change() {
        let mut studio = studio();
        studio.handle(Event::TextChange{text: String::new()});

        // Mutate the model directly; export settles the surface itself.
        studio.config_mut().set_width("100");
        studio.config_mut().set_height("50");
        let artifact = studio.export().unwrap();
        assert_eq!((100, 50), artifact.dimensions());
    }

    #[test]
    fn color_change_exports_flat_color_instead_of_the_image() {
        let mut studio = studio();
        studio.handle(Event::TextChange{text: String::new()});

        let green = Color(0, 0xff, 0);
        studio.handle(Event::BackgroundImageUpload{image: uploaded_image(green)});
        let with_image = image::load_from_memory(&studio.export().unwrap()).unwrap();
        let pixel = with_image.get_pixel(0, 0);
        assert!(pixel.data[1] > 0xf0, "expected the green image, got {:?}", pixel);

        studio.handle(Event::BackgroundColorChange{color: Color::black()});
        let flat = image::load_from_memory(&studio.export().unwrap()).unwrap();
        assert_eq!(Color::black().to_rgba(0xff), flat.get_pixel(0, 0));

        // Uploading again restores the image display.
        studio.handle(Event::BackgroundImageUpload{image: uploaded_image(green)});
        let restored = image::load_from_memory(&studio.export().unwrap()).unwrap();
        assert!(restored.get_pixel(0, 0).data[1] > 0xf0);
    }

    #[test]
    fn missing_font_fails_the_export_but_nothing_else() {
        let mut studio = studio();
        studio.handle(Event::TextChange{text: "Stay hungry".into()});

        match studio.export() {
            Err(ExportError::Font(ref family, _)) => {
                assert_eq!(studio.config().font_family().name(), family.as_str());
            }
            result => panic!("unexpected result: {:?}", result.map(|a| a.dimensions())),
        }

        // The session is fully usable afterwards.
        studio.handle(Event::TextChange{text: String::new()});
        assert!(studio.export().is_ok());
    }

    #[test]
    fn in_place_edits_reach_the_model_and_survive_other_changes() {
        let mut studio = studio();
        studio.edit_text("typed into the banner");
        assert_eq!("typed into the banner", studio.config().text());
        assert_eq!("typed into the banner", studio.surface().text());

        studio.handle(Event::WidthChange{value: "640".into()});
        assert_eq!("typed into the banner", studio.surface().text());
    }

    #[test]
    fn rapid_exports_are_independent() {
        let mut studio = studio();
        studio.handle(Event::TextChange{text: String::new()});

        let first = studio.export().unwrap();
        let second = studio.export().unwrap();
        assert_eq!(first.bytes(), second.bytes());
    }
}
