//! Generative contour sketches.
//!
//! Each frame samples an animated noise field, extracts the band boundaries
//! with [`isoband`], and strokes them onto a raster canvas.

pub mod config;
pub mod field;
pub mod pipeline;
pub mod render;
