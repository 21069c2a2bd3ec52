//! Module implementing the `Color` type.

use std::error;
use std::fmt;
use std::str::FromStr;

use css_color_parser::{Color as CssColor, ColorParseError as CssColorParseError};
use image::{Rgb, Rgba};
use rand::Rng;


/// RGB color of a banner element (text or background).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    /// Create a white color.
    #[inline]
    pub fn white() -> Self {
        Self::gray(0xff)
    }

    /// Create a black color.
    #[inline]
    pub fn black() -> Self {
        Self::gray(0x00)
    }

    /// Create a gray color of given intensity.
    #[inline]
    pub fn gray(value: u8) -> Self {
        Color(value, value, value)
    }

    /// Draw a color uniformly from the whole 24-bit RGB space.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let rgb = rng.gen_range(0u32, 0x1000000);
        Color((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }
}

impl Color {
    /// Convert the color to its chromatic inverse.
    #[inline]
    pub fn invert(self) -> Self {
        let Color(r, g, b) = self;
        Color(0xff - r, 0xff - g, 0xff - b)
    }

    #[inline]
    pub(crate) fn to_rgb(&self) -> Rgb<u8> {
        let &Color(r, g, b) = self;
        Rgb{data: [r, g, b]}
    }

    #[inline]
    pub(crate) fn to_rgba(&self, alpha: u8) -> Rgba<u8> {
        let &Color(r, g, b) = self;
        Rgba{data: [r, g, b, alpha]}
    }
}

impl From<Color> for Rgb<u8> {
    #[inline]
    fn from(color: Color) -> Rgb<u8> {
        color.to_rgb()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let &Color(r, g, b) = self;
        write!(fmt, "#{:0>2x}{:0>2x}{:0>2x}", r, g, b)
    }
}


impl FromStr for Color {
    type Err = ColorParseError;

    /// Parse a CSS color: a name (`"green"`) or a hex code (`"#aabbcc"`).
    ///
    /// Hex codes may also use the `0x` prefix, in which case all six digits
    /// are required.
    fn from_str(v: &str) -> Result<Self, Self::Err> {
        let mut s = v.trim().to_lowercase();
        if s.starts_with("0x") {
            s = s.trim_left_matches("0x").to_owned();
            if s.len() != 6 {
                return Err(ColorParseError::Css(CssColorParseError));
            }
            s = format!("#{}", s);
        }

        let css_color: CssColor = s.parse()?;
        if css_color.a != 1.0 {
            return Err(ColorParseError::Alpha(css_color.a));
        }

        Ok(Color(css_color.r, css_color.g, css_color.b))
    }
}


/// Error that may occur while parsing a `Color` from a string.
#[derive(Debug)]
pub enum ColorParseError {
    /// The string is not valid CSS color syntax.
    Css(CssColorParseError),
    /// The color erroneously includes an alpha channel value.
    Alpha(f32),
}

impl From<CssColorParseError> for ColorParseError {
    fn from(input: CssColorParseError) -> Self {
        ColorParseError::Css(input)
    }
}

impl error::Error for ColorParseError {
    fn description(&self) -> &str { "color parse error" }
    fn cause(&self) -> Option<&error::Error> {
        match *self {
            ColorParseError::Css(ref e) => Some(e),
            ColorParseError::Alpha(_) => None,
        }
    }
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ColorParseError::Css(ref e) => write!(fmt, "invalid CSS color syntax: {}", e),
            ColorParseError::Alpha(a) => write!(fmt, "color transparency not supported (alpha={})", a),
        }
    }
}

// css_color_parser::ColorParseError doesn't impl PartialEq,
// so we cannot #[derive] this.
impl PartialEq<ColorParseError> for ColorParseError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (&ColorParseError::Css(_), &ColorParseError::Css(_)) => true,
            (&ColorParseError::Alpha(a1), &ColorParseError::Alpha(a2)) => a1 == a2,
            _ => false,
        }
    }
}


#[cfg(test)]
mod tests {
    mod from_str {
        use std::str::FromStr;
        use spectral::prelude::*;
        use super::super::Color;

        #[test]
        fn named_colors() {
            assert_that!(Color::from_str("black")).is_ok().is_equal_to(Color(0, 0, 0));
            assert_that!(Color::from_str("white")).is_ok().is_equal_to(Color(0xff, 0xff, 0xff));
            assert_that!(Color::from_str("green")).is_ok().is_equal_to(Color(0, 0x80, 0));
            assert_that!(Color::from_str("tomato")).is_ok().is_equal_to(Color(255, 99, 71));
            assert_that!(Color::from_str("not-a-color")).is_err();
        }

        #[test]
        fn hex_codes() {
            assert_that!(Color::from_str("#0f0")).is_ok().is_equal_to(Color(0, 0xff, 0));
            assert_that!(Color::from_str("#00ff00")).is_ok().is_equal_to(Color(0, 0xff, 0));
            assert_that!(Color::from_str("0xff0000")).is_ok().is_equal_to(Color(0xff, 0, 0));
            // Short form is ambiguous without the CSS prefix.
            assert_that!(Color::from_str("0xf0f")).is_err();
            // No prefix at all could be a color name, so it has to parse as one.
            assert_that!(Color::from_str("f0f0f0")).is_err();
        }

        #[test]
        fn transparency_not_supported() {
            assert_that!(Color::from_str("transparent")).is_err();
            assert_that!(Color::from_str("rgba(0, 0, 0, 0.5)")).is_err();
        }
    }

    mod random {
        use rand::{SeedableRng, StdRng};
        use super::super::Color;

        #[test]
        fn covers_the_24bit_space_evenly() {
            let mut rng = StdRng::from_seed(&[42]);

            // Bucket each channel and check that no bucket starves,
            // which would indicate a biased (or truncated) sampling.
            const TRIALS: usize = 10_000;
            let mut buckets = [[0usize; 4]; 3];
            for _ in 0..TRIALS {
                let Color(r, g, b) = Color::random(&mut rng);
                for (i, &ch) in [r, g, b].iter().enumerate() {
                    buckets[i][(ch / 64) as usize] += 1;
                }
            }

            let expected = TRIALS / 4;
            for channel in buckets.iter() {
                for &count in channel.iter() {
                    assert!(count > expected / 2 && count < expected * 2,
                        "skewed channel bucket: {} vs expected ~{}", count, expected);
                }
            }
        }
    }
}
