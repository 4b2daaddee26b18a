//! Core library for a single-generation Game of Life over plain PPM images.

pub mod engine;
pub mod image;
pub mod ppm;

pub use engine::GameOfLife;
pub use image::{Image, Pixel};
pub use ppm::{ImageCodec, PlainPpm, PpmError};
