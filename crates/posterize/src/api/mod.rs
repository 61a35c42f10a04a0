//! Public API for the posterize crate.
//!
//! This module provides the high-level API: the [`Posterizer`] builder, the
//! [`posterize`] shorthand and the [`PosterizeError`] error type.

mod builder;
mod error;

pub use builder::{posterize, Posterizer, MAX_COLORS};
pub use error::{ParseOptionError, PosterizeError};
