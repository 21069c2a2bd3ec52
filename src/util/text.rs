//! Module responsible for rendering text.

use std::collections::HashSet;
use std::fmt;
use std::mem;

use image::{DynamicImage, GenericImage};
use itertools::Itertools;
use regex::Regex;
use rusttype::{Font, GlyphId, Rect, Scale, point};

use model::Color;


/// Check if given font has all the glyphs for given text.
pub fn check<'f, 's>(font: &'f Font<'f>, text: &'s str) {
    let mut missing = HashSet::new();
    for ch in text.chars() {
        let glyph = font.glyph(ch);
        if glyph.is_none() || glyph.unwrap().id() == GlyphId(0) {
            missing.insert(ch as u32);
        }
    }
    if !missing.is_empty() {
        warn!("Missing glyphs for {} codepoint(s): {:#x}",
            missing.len(), missing.iter().format(", "));
    }
}


/// Style that the text is rendered with.
pub struct Style<'f> {
    font: &'f Font<'f>,
    size: f32,
    color: Color,
}

impl<'f> Style<'f> {
    pub fn new(font: &'f Font, size: f32, color: Color) -> Self {
        if size <= 0.0 {
            panic!("text::Style got non-positive size ({})", size);
        }
        Style{font, size, color}
    }

    #[inline]
    pub fn scale(&self) -> Scale {
        Scale::uniform(self.size)
    }
}

impl<'f> fmt::Debug for Style<'f> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("Style")
            .field("font", &"Font{}")  // no displayable info there
            .field("size", &self.size)
            .field("color", &self.color)
            .finish()
    }
}


/// Render text as a centered block of lines within given rectangle.
///
/// Explicit line breaks in the text are honored; lines too wide for the
/// rectangle are additionally wrapped at word boundaries.
/// Glyphs falling outside the image are clipped.
pub fn render_block(img: DynamicImage, s: &str, rect: Rect<f32>, style: Style) -> DynamicImage {
    let mut img = img;
    trace!("render_block(..., <length: {}>, {:?}, {:?})", s.len(), rect, style);

    // Rendering text requires alpha blending.
    if img.as_rgba8().is_none() {
        img = DynamicImage::ImageRgba8(img.to_rgba());
    }

    let lines = break_lines(s, &style, rect.width());
    trace!("Text broken into {} line(s)", lines.len());

    let scale = style.scale();
    let v_metrics = style.font.v_metrics(scale);
    let line_height = v_metrics.ascent - v_metrics.descent + v_metrics.line_gap;

    // Lay the lines out as a single block centered within the rectangle.
    let block_height = lines.len() as f32 * line_height;
    let mut baseline_y =
        rect.min.y + (rect.height() - block_height) / 2.0 + v_metrics.ascent;

    for line in lines {
        let line_width = text_width(&line, &style);
        let baseline_x = rect.min.x + (rect.width() - line_width) / 2.0;

        for glyph in style.font.layout(&line, scale, point(baseline_x, baseline_y)) {
            if let Some(bbox) = glyph.pixel_bounding_box() {
                glyph.draw(|x, y, v| {
                    let x = (bbox.min.x + x as i32) as u32;
                    let y = (bbox.min.y + y as i32) as u32;
                    let alpha = (v * 255f32) as u8;
                    if img.in_bounds(x, y) {
                        img.blend_pixel(x, y, style.color.to_rgba(alpha));
                    }
                });
            }
        }
        baseline_y += line_height;
    }
    img
}


/// Break the text into lines, fitting given width.
fn break_lines(s: &str, style: &Style, line_width: f32) -> Vec<String> {
    s.lines()
        .flat_map(|line| {
            let broken = break_single_line(line, style, line_width);
            // An explicitly empty line still occupies vertical space.
            if broken.is_empty() { vec![String::new()] } else { broken }
        })
        .collect()
}

/// Break a single line (no explicit line breaks) into multiple lines.
fn break_single_line(s: &str, style: &Style, line_width: f32) -> Vec<String> {
    lazy_static! {
        static ref WORD_BOUNDARY: Regex = Regex::new(r"\b").unwrap();
    }

    let mut result = vec![];
    let mut current = String::new();
    let mut current_width = 0.0;

    for segment in WORD_BOUNDARY.split(s).filter(|s| !s.is_empty()) {
        let segment_width = text_width(segment, style);

        // Simplest case: the segment fits within the current line.
        if current_width + segment_width <= line_width {
            current.push_str(segment);
            current_width += segment_width;
            continue;
        }

        // It doesn't fit here but would fit in a line of its own,
        // so break the current line before it.
        if segment_width <= line_width {
            if !current.is_empty() {
                result.push(mem::replace(&mut current, String::new()));
            }
            current_width = 0.0;
            // An overflowing lone space is adequately represented
            // by the line break itself.
            if segment != " " {
                current.push_str(segment);
                current_width = segment_width;
            }
            continue;
        }

        // The segment alone is longer than a whole line;
        // chop it up character by character.
        for ch in segment.chars() {
            let ch_width = char_width(ch, style);
            if current_width + ch_width > line_width && !current.is_empty() {
                result.push(mem::replace(&mut current, String::new()));
                current_width = 0.0;
            }
            current.push(ch);
            current_width += ch_width;
        }
    }

    if !current.is_empty() {
        result.push(current);
    }
    result
}

/// Compute the pixel width of given text.
fn text_width(s: &str, style: &Style) -> f32 {
    // Text width is the final X position of the "caret"
    // after laying out all the glyphs, starting from X=0.
    let glyphs: Vec<_> = style.font
        .layout(s, style.scale(), point(0.0, /* unused */ 0.0))
        .collect();
    glyphs.iter()
        .rev()
        .filter_map(|g| g.pixel_bounding_box().map(|bb| {
            bb.min.x as f32 + g.unpositioned().h_metrics().advance_width
        }))
        .next().unwrap_or(0.0)
}

/// Compute the pixel width of given character.
fn char_width(c: char, style: &Style) -> f32 {
    // Not just text_width() of a 1-char string, because that would include
    // a bounding box shift used for kerning.
    style.font.glyph(c)
        .map(|g| g.scaled(style.scale()).h_metrics().advance_width)
        .unwrap_or(0.0)
}
