//! Process-wide immutable application state.

use guestgraph_common::{AppearanceTable, GuestEpisodeCount, Result, SeasonFilter, SeasonNumber};
use guestgraph_config::ChartConfig;
use guestgraph_graphs::{bar_chart, BarChartRenderer, ChartSpec, TopGuestsAggregator};

/// Shared application state, constructed once at startup and injected into
/// every request handler.
///
/// The appearance table is loaded before the server starts and never
/// rewritten, so the context can be shared across sessions without locking;
/// every request reads the same snapshot.
pub struct AppContext {
    table: AppearanceTable,
    seasons: Vec<SeasonNumber>,
    aggregator: TopGuestsAggregator,
    renderer: BarChartRenderer,
}

impl AppContext {
    /// Builds the context from a loaded table and chart settings.
    pub fn new(table: AppearanceTable, chart: &ChartConfig) -> Self {
        let seasons = table.seasons();
        Self {
            table,
            seasons,
            aggregator: TopGuestsAggregator::with_limit(chart.limit as usize),
            renderer: BarChartRenderer::new(chart.width, chart.height),
        }
    }

    /// The loaded appearance table.
    pub fn table(&self) -> &AppearanceTable {
        &self.table
    }

    /// Distinct seasons present in the table, sorted ascending.
    pub fn seasons(&self) -> &[SeasonNumber] {
        &self.seasons
    }

    /// Ranked guests for the given filter.
    pub fn top_guests(&self, filter: &SeasonFilter) -> Vec<GuestEpisodeCount> {
        self.aggregator.aggregate(&self.table, filter)
    }

    /// Chart spec for the given filter.
    pub fn chart_spec(&self, filter: &SeasonFilter) -> ChartSpec {
        bar_chart(&self.top_guests(filter))
    }

    /// Rendered PNG chart for the given filter.
    pub fn chart_png(&self, filter: &SeasonFilter) -> Result<Vec<u8>> {
        self.renderer.render_png(&self.chart_spec(filter))
    }
}
