//! Isoline and isoband boundary extraction for sampled scalar fields.
//!
//! The pipeline mirrors how the sketches use it once per frame:
//! - [`extract_bands`] runs marching squares over a [`ScalarGrid`] and chains
//!   the cell segments into [`Polyline`]s in grid-index space
//! - [`rescale`] maps grid coordinates onto the output surface
//! - [`clip_to_box`] trims the result to a viewport
//!
//! Every step is a pure function of its inputs.

pub mod band;
pub mod cases;
pub mod chain;
pub mod error;
pub mod extract;
pub mod geometry;
pub mod grid;
pub mod smooth;
pub mod transform;

pub use band::{bands_from_thresholds, generate_levels, level_count, Band, MAX_LEVELS};
pub use chain::connect_segments;
pub use error::{IsobandError, IsobandResult};
pub use extract::{
    extract_band, extract_bands, extract_bands_par, extract_isolines, march_band, Segment,
};
pub use geometry::{ClipBox, OutputSize, Point, Polyline};
pub use grid::{GridSize, ScalarGrid};
pub use smooth::{smooth, smooth_all};
pub use transform::{clip_to_box, rescale};
