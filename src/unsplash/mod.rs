//! Unsplash photo search
//!
//! Request building, response decoding, and the `PhotoSearch` seam used by
//! the session controller.

pub mod client;
pub mod types;

pub use client::{PhotoSearch, UnsplashClient};
pub use types::{ImageResult, SearchPage};
