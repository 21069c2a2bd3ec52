//! Module with custom deserializers for the model types.

mod color;
mod image_ref;
