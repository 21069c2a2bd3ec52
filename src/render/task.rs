//! Module implementing the actual export task.
//! Most of the rasterization logic lives here.

use std::sync::Arc;

use image::{DynamicImage, FilterType, GenericImage, ImageBuffer};
use image::png::PNGEncoder;
use rusttype::{Rect, point, vector};

use resources::{Font, Loader};
use util::text;
use super::engine;
use super::error::ExportError;
use super::output::ExportArtifact;
use super::surface::{Style, Surface};


/// Represents a single export and contains all the relevant logic.
///
/// The task captures the surface as it is at creation time;
/// `perform` is synchronous and safe to run in a background thread.
pub(super) struct ExportTask<'s, Fl>
    where Fl: Loader<Item=Font>
{
    surface: &'s Surface,
    engine: Arc<engine::Inner<Fl>>,
}

impl<'s, Fl> ExportTask<'s, Fl>
    where Fl: Loader<Item=Font>
{
    #[inline]
    pub fn new(surface: &'s Surface, engine: Arc<engine::Inner<Fl>>) -> Self {
        ExportTask{surface, engine}
    }
}

impl<'s, Fl> ExportTask<'s, Fl>
    where Fl: Loader<Item=Font>
{
    /// Perform the export task.
    pub fn perform(self) -> Result<ExportArtifact, ExportError<Fl>> {
        let style = self.surface.style();
        debug!("Rasterizing {:?}", style);

        let (width, height) = (style.width, style.height);
        if width == 0 || height == 0 {
            return Err(ExportError::EmptySurface);
        }

        let mut img = self.compose_background(style);
        let text = self.surface.text();
        if !text.is_empty() {
            img = self.draw_text(img, text, style)?;
        }

        let bytes = self.encode(img)?;
        Ok(ExportArtifact::new(width, height, bytes))
    }

    /// Produce the canvas with the background applied.
    ///
    /// A background image covers the whole canvas the way CSS
    /// `background-size: cover` does: scaled preserving aspect until both
    /// extents are covered, then center-cropped. Without an image,
    /// the canvas is a flat fill of the background color.
    fn compose_background(&self, style: &Style) -> DynamicImage {
        let (width, height) = (style.width, style.height);

        match style.background_image {
            Some(ref image) => {
                let (img_width, img_height) = image.dimensions();
                let scale = f32::max(width as f32 / img_width as f32,
                                     height as f32 / img_height as f32);
                let scaled_width = ((img_width as f32 * scale).ceil() as u32).max(width);
                let scaled_height = ((img_height as f32 * scale).ceil() as u32).max(height);
                debug!("Covering {}x{} canvas with background image: {}x{} -> {}x{}",
                    width, height, img_width, img_height, scaled_width, scaled_height);

                let mut covering =
                    image.resize_exact(scaled_width, scaled_height, FilterType::Lanczos3);
                let x = (scaled_width - width) / 2;
                let y = (scaled_height - height) / 2;
                covering.crop(x, y, width, height)
            }
            None => {
                trace!("Filling {}x{} canvas with {}", width, height, style.background_color);
                DynamicImage::ImageRgba8(ImageBuffer::from_pixel(
                    width, height, style.background_color.to_rgba(0xff)))
            }
        }
    }

    /// Draw the surface text onto the canvas. Returns a new image.
    fn draw_text(&self, img: DynamicImage, text: &str,
                 style: &Style) -> Result<DynamicImage, ExportError<Fl>> {
        let family = style.font_family.name();
        trace!("Loading font `{}`...", family);
        let font = self.engine.font_loader.load(family)
            .map_err(|e| ExportError::Font(family.to_owned(), e))?;

        text::check(&*font, text);

        let width = style.width as f32;
        let height = style.height as f32;

        // Keep a small margin off the canvas edges, limited to a couple
        // of percent so that tiny banners don't lose half their area.
        let max_margin: f32 = 16.0;
        let hmargin = max_margin.min(width * 0.02);
        let vmargin = max_margin.min(height * 0.02);
        let margin_vector = vector(hmargin, vmargin);
        let rect: Rect<f32> = Rect{
            min: point(0.0, 0.0) + margin_vector,
            max: point(width, height) - margin_vector,
        };

        let text_style = text::Style::new(&*font, style.font_size, style.font_color);
        Ok(text::render_block(img, text, rect, text_style))
    }

    /// Encode the final canvas as PNG bytes.
    fn encode(&self, img: DynamicImage) -> Result<Vec<u8>, ExportError<Fl>> {
        let (width, height) = img.dimensions();
        trace!("Writing {}x{} PNG image", width, height);

        let mut result = vec![];
        let pixels = &*img.raw_pixels();
        PNGEncoder::new(&mut result)
            .encode(pixels, width, height, img.color())
            .map_err(ExportError::Encode)?;
        Ok(result)
    }
}
