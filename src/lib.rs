//!
//! bannr  -- Text banners on demand
//!

             extern crate antidote;
             extern crate base64;
             extern crate css_color_parser;
#[macro_use] extern crate enum_derive;
             extern crate float_ord;
             extern crate glob;
             extern crate image;
             extern crate itertools;
#[macro_use] extern crate lazy_static;
#[macro_use] extern crate log;
             extern crate lru_cache;
#[macro_use] extern crate macro_attr;
#[macro_use] extern crate maplit;
             extern crate mime;
#[macro_use] extern crate newtype_derive;
             extern crate rand;
             extern crate regex;
             extern crate rusttype;
             extern crate serde;
#[macro_use] extern crate serde_derive;


#[cfg(test)] #[macro_use] extern crate serde_json;
#[cfg(test)]              extern crate serde_test;
#[cfg(test)] #[macro_use] extern crate spectral;


mod model;
mod render;
mod resources;
mod studio;
mod util;


pub use model::*;
pub use render::*;
pub use resources::*;
pub use studio::*;
pub use util::cache::*;
