//! Module defining the font family choices.

use std::error;
use std::fmt;
use std::str::FromStr;


macro_attr! {
    /// One of the font families the banner text can be set in.
    ///
    /// The set is fixed: every family has a corresponding font resource
    /// that the export pipeline can rasterize with.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash,
             Deserialize, IterVariants!(FontFamilies))]
    pub enum FontFamily {
        #[serde(rename = "Song Myung")]
        SongMyung,
        #[serde(rename = "Yeon Sung")]
        YeonSung,
        #[serde(rename = "Noto Sans KR")]
        NotoSansKr,
        #[serde(rename = "Noto Serif KR")]
        NotoSerifKr,
        #[serde(rename = "East Sea Dokdo")]
        EastSeaDokdo,
        #[serde(rename = "Single Day")]
        SingleDay,
        #[serde(rename = "Nanum Pen Script")]
        NanumPenScript,
        #[serde(rename = "PT Serif")]
        PtSerif,
        #[serde(rename = "Roboto")]
        Roboto,
        #[serde(rename = "Nunito")]
        Nunito,
        #[serde(rename = "Lobster")]
        Lobster,
        #[serde(rename = "Bebas Neue")]
        BebasNeue,
    }
}

impl FontFamily {
    /// The family name, as presented to the user
    /// and as the font resource is named.
    pub fn name(&self) -> &'static str {
        match *self {
            FontFamily::SongMyung => "Song Myung",
            FontFamily::YeonSung => "Yeon Sung",
            FontFamily::NotoSansKr => "Noto Sans KR",
            FontFamily::NotoSerifKr => "Noto Serif KR",
            FontFamily::EastSeaDokdo => "East Sea Dokdo",
            FontFamily::SingleDay => "Single Day",
            FontFamily::NanumPenScript => "Nanum Pen Script",
            FontFamily::PtSerif => "PT Serif",
            FontFamily::Roboto => "Roboto",
            FontFamily::Nunito => "Nunito",
            FontFamily::Lobster => "Lobster",
            FontFamily::BebasNeue => "Bebas Neue",
        }
    }
}

impl Default for FontFamily {
    fn default() -> Self {
        FontFamily::EastSeaDokdo
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.name())
    }
}

impl FromStr for FontFamily {
    type Err = UnknownFontFamily;

    fn from_str(v: &str) -> Result<Self, Self::Err> {
        let name = v.trim();
        FontFamily::iter_variants()
            .find(|f| f.name() == name)
            .ok_or_else(|| UnknownFontFamily(name.to_owned()))
    }
}


/// Error signaling a font family outside of the supported set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownFontFamily(pub String);

impl error::Error for UnknownFontFamily {
    fn description(&self) -> &str { "unknown font family" }
    fn cause(&self) -> Option<&error::Error> { None }
}

impl fmt::Display for UnknownFontFamily {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "unknown font family: `{}`", self.0)
    }
}


#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use spectral::prelude::*;
    use super::FontFamily;

    #[test]
    fn every_family_roundtrips_through_its_name() {
        for family in FontFamily::iter_variants() {
            assert_that!(FontFamily::from_str(family.name()))
                .is_ok().is_equal_to(family);
        }
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_that!(FontFamily::from_str("Nonexistent Font")).is_err();
        assert_that!(FontFamily::from_str("")).is_err();
        // Case matters; the select control supplies names verbatim.
        assert_that!(FontFamily::from_str("roboto")).is_err();
    }

    #[test]
    fn twelve_families() {
        assert_eq!(12, FontFamily::iter_variants().count());
    }
}
