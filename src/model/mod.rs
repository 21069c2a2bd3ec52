//! Module defining the banner state model.

mod constants;
mod de;
mod event;
mod types;

pub use self::constants::*;
pub use self::event::Event;
pub use self::types::*;
