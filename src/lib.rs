//! small-multiples: layout engine for small-multiples line charts.
//!
//! A data set is split into one cell per facet, the cells are sized into a
//! grid that fits the host viewport, and a shared value axis and category
//! axis are resolved for the whole grid. When space runs out, axis text
//! collapses instead of overflowing.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{SmallMultiplesEngine, VisualSettings};
pub use error::{ChartError, ChartResult};
