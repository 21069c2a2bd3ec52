//! Module implementing the render & export pipeline.

mod engine;
mod error;
mod output;
mod surface;
mod task;


pub use self::engine::Engine;
pub use self::error::ExportError;
pub use self::output::{ExportArtifact, EXPORT_FILE_NAME};
pub use self::surface::{Style, Surface};
