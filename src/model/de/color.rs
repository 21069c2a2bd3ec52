//! Deserializer for the Color type.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserialize, Visitor};

use model::types::Color;


const EXPECTING_MSG: &'static str = "CSS color string or an RGB triple";


impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where D: de::Deserializer<'de>
    {
        deserializer.deserialize_any(ColorVisitor)
    }
}

struct ColorVisitor;
impl<'de> Visitor<'de> for ColorVisitor {
    type Value = Color;

    fn expecting(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", EXPECTING_MSG)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        let color = Color::from_str(v).map_err(|e| {
            warn!("Failed to parse color `{}`: {}", v, e);
            E::custom(e)
        })?;
        Ok(color)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where A: de::SeqAccess<'de>
    {
        const LEN: usize = 3;
        if let Some(size) = seq.size_hint() {
            if size != LEN {
                return Err(de::Error::invalid_length(size, &"3"));
            }
        }

        let mut channels = Vec::with_capacity(LEN);
        while let Some(elem) = seq.next_element::<u8>()? {
            channels.push(elem);
            if channels.len() > LEN {
                return Err(de::Error::invalid_length(channels.len(), &"3"));
            }
        }
        if channels.len() < LEN {
            return Err(de::Error::invalid_length(channels.len(), &"3"));
        }

        let mut result = channels.into_iter();
        Ok(Color(result.next().unwrap(),
                 result.next().unwrap(),
                 result.next().unwrap()))
    }
}


#[cfg(test)]
mod tests {
    use serde_test::{assert_de_tokens, assert_de_tokens_error, Token as T};
    use model::types::Color;
    use super::EXPECTING_MSG;

    #[test]
    fn must_be_valid_type() {
        assert_de_tokens_error::<Color>(
            &[T::Unit],
            &format!("invalid type: unit value, expected {}", EXPECTING_MSG));
        assert_de_tokens_error::<Color>(
            &[T::Bool(false)],
            &format!("invalid type: boolean `false`, expected {}", EXPECTING_MSG));
    }

    #[test]
    fn can_be_css_color_name() {
        assert_de_tokens(&Color(255, 0, 0), &[T::Str("red")]);
        assert_de_tokens(&Color(255, 99, 71), &[T::Str("tomato")]);
    }

    #[test]
    fn can_be_hex_code() {
        assert_de_tokens(&Color(0, 0xff, 0), &[T::Str("#00ff00")]);
        assert_de_tokens(&Color(0x12, 0x34, 0x56), &[T::Str("#123456")]);
    }

    #[test]
    fn can_be_rgb_sequence() {
        assert_de_tokens(&Color(1, 2, 3), &[
            T::Seq{len: Some(3)}, T::U8(1), T::U8(2), T::U8(3), T::SeqEnd]);
        assert_de_tokens(&Color(1, 2, 3), &[
            T::Seq{len: None}, T::U8(1), T::U8(2), T::U8(3), T::SeqEnd]);
        // Must be exactly 3 elements.
        assert_de_tokens_error::<Color>(
            &[T::Seq{len: Some(7)}], "invalid length 7, expected 3");
        assert_de_tokens_error::<Color>(&[
            T::Seq{len: None}, T::U8(1), T::U8(2), T::SeqEnd,
        ], "invalid length 2, expected 3");
    }
}
