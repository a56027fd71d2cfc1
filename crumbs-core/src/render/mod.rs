//! Fixed-width ASCII renderers.
//!
//! Both renderers take read-only views of [`crate::AggregateStats`] and return
//! new strings, so they can run in any order or in parallel.

pub mod bar_chart;
pub mod line_plot;

pub use bar_chart::{render_group_bars, scale_divisor};
pub use line_plot::{render_hour_plot, LinePlot};
