//! paintbynum - paint by number boards from photos
//!
//! Loads a PNG photo, posterizes it with the `posterize` engine and writes
//! the puzzle artifacts. This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
