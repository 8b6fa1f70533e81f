//! Per-guest distinct-episode-count aggregation.

use guestgraph_common::{AppearanceTable, GuestEpisodeCount, SeasonFilter};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Default number of guests kept in the result.
pub const DEFAULT_LIMIT: usize = 10;

/// Aggregates appearance records into a ranked list of guests.
#[derive(Debug, Clone)]
pub struct TopGuestsAggregator {
    /// Maximum number of guests to return.
    limit: usize,
}

impl TopGuestsAggregator {
    /// Creates an aggregator with the default limit of ten guests.
    pub fn new() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
        }
    }

    /// Creates an aggregator with a custom limit.
    pub fn with_limit(limit: usize) -> Self {
        Self { limit }
    }

    /// Computes the top guests by distinct episode count.
    ///
    /// Records failing the filter are discarded, the rest are grouped by
    /// guest, and each guest is credited one count per distinct episode name.
    /// Duplicate rows for the same guest and episode never inflate the count.
    /// The result is sorted by count descending; guests with equal counts
    /// order alphabetically. An empty subset yields an empty result.
    pub fn aggregate(
        &self,
        table: &AppearanceTable,
        filter: &SeasonFilter,
    ) -> Vec<GuestEpisodeCount> {
        let mut episodes_by_guest: HashMap<&str, HashSet<&str>> = HashMap::new();

        for record in table.records() {
            if !filter.matches(record) {
                continue;
            }
            episodes_by_guest
                .entry(record.person_name.as_str())
                .or_default()
                .insert(record.episode_name.as_str());
        }

        let mut result: Vec<GuestEpisodeCount> = episodes_by_guest
            .into_iter()
            .map(|(person_name, episodes)| GuestEpisodeCount {
                person_name: person_name.to_string(),
                episode_count: episodes.len() as u32,
            })
            .collect();

        result.sort_by(|a, b| {
            b.episode_count
                .cmp(&a.episode_count)
                .then_with(|| a.person_name.cmp(&b.person_name))
        });
        result.truncate(self.limit);

        debug!(
            guests = result.len(),
            unfiltered = filter.is_unfiltered(),
            "aggregated top guests"
        );
        result
    }
}

impl Default for TopGuestsAggregator {
    fn default() -> Self {
        Self::new()
    }
}

/// Computes the top ten guests for a table and filter.
pub fn top_guests(table: &AppearanceTable, filter: &SeasonFilter) -> Vec<GuestEpisodeCount> {
    TopGuestsAggregator::new().aggregate(table, filter)
}
