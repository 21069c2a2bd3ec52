//! Deserializer for the ImageRef type.

use std::fmt;

use serde::de::{self, Deserialize, Visitor};

use model::types::ImageRef;


const EXPECTING_MSG: &'static str = "data URI or file path of an image";


impl<'de> Deserialize<'de> for ImageRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where D: de::Deserializer<'de>
    {
        deserializer.deserialize_str(ImageRefVisitor)
    }
}

struct ImageRefVisitor;
impl<'de> Visitor<'de> for ImageRefVisitor {
    type Value = ImageRef;

    fn expecting(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", EXPECTING_MSG)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        if v.is_empty() {
            return Err(de::Error::invalid_value(de::Unexpected::Str(v), &EXPECTING_MSG));
        }
        // Anything that isn't a data URI is taken for a path;
        // whether it points to a decodable image is decided at load time.
        if v.starts_with("data:") {
            Ok(ImageRef::DataUri(v.to_owned()))
        } else {
            Ok(ImageRef::Path(v.into()))
        }
    }
}


#[cfg(test)]
mod tests {
    use serde_test::{assert_de_tokens, assert_de_tokens_error, Token as T};
    use model::types::ImageRef;

    #[test]
    fn data_uris() {
        assert_de_tokens(
            &ImageRef::DataUri("data:image/png;base64,AAAA".into()),
            &[T::Str("data:image/png;base64,AAAA")]);
    }

    #[test]
    fn paths() {
        assert_de_tokens(
            &ImageRef::Path("backgrounds/sunset.jpg".into()),
            &[T::Str("backgrounds/sunset.jpg")]);
    }

    #[test]
    fn not_anything_else() {
        assert_de_tokens_error::<ImageRef>(
            &[T::I32(42)],
            "invalid type: integer `42`, expected data URI or file path of an image");
        assert_de_tokens_error::<ImageRef>(
            &[T::Str("")],
            "invalid value: string \"\", expected data URI or file path of an image");
    }
}
