//! Data loading, aggregation, and chart generation for GuestGraph.
//!
//! The pipeline runs in one direction: the [`fetcher`] loads the CSV snapshot
//! once at startup, the [`aggregator`] computes per-guest distinct-episode
//! counts over it for a season filter, [`chart`] turns the result into a
//! declarative bar chart spec, and [`renderer`] rasterizes that spec to PNG.

pub mod aggregator;
pub mod chart;
pub mod fetcher;
pub mod renderer;

pub use aggregator::{top_guests, TopGuestsAggregator};
pub use chart::{bar_chart, ChartBar, ChartSpec};
pub use fetcher::DataFetcher;
pub use renderer::BarChartRenderer;
