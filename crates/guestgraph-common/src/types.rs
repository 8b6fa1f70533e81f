//! Domain types for guest appearance data.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A season number as it appears in the source data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeasonNumber(pub u32);

impl fmt::Display for SeasonNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One row of the source table: a single guest appearance in an episode.
///
/// Records are validated at load time; rows without a person or episode name
/// never make it into an [`AppearanceTable`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestAppearanceRecord {
    /// Name of the appearing guest.
    pub person_name: String,
    /// Season the episode belongs to, when the source provides one.
    pub season_number: Option<SeasonNumber>,
    /// Episode name, identifying a unique episode.
    pub episode_name: String,
}

impl GuestAppearanceRecord {
    /// Convenience constructor for a fully specified record.
    pub fn new(
        person_name: impl Into<String>,
        season_number: Option<SeasonNumber>,
        episode_name: impl Into<String>,
    ) -> Self {
        Self {
            person_name: person_name.into(),
            season_number,
            episode_name: episode_name.into(),
        }
    }
}

/// The full ordered collection of appearance records.
///
/// Loaded exactly once at process start and held as an immutable snapshot for
/// the lifetime of the server; every request reads the same data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppearanceTable {
    records: Vec<GuestAppearanceRecord>,
}

impl AppearanceTable {
    /// Builds a table from already-validated records.
    pub fn new(records: Vec<GuestAppearanceRecord>) -> Self {
        Self { records }
    }

    /// All records in source order.
    pub fn records(&self) -> &[GuestAppearanceRecord] {
        &self.records
    }

    /// Number of records in the table.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct season numbers present in the table, sorted ascending.
    /// Records without a season are excluded.
    pub fn seasons(&self) -> Vec<SeasonNumber> {
        self.records
            .iter()
            .filter_map(|record| record.season_number)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// The set of seasons selected in the UI.
///
/// An empty filter means "no filter / include all seasons", including records
/// with a missing season number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeasonFilter {
    seasons: BTreeSet<SeasonNumber>,
}

impl SeasonFilter {
    /// The unfiltered selection: every record matches.
    pub fn all() -> Self {
        Self::default()
    }

    /// Whether this filter selects everything.
    pub fn is_unfiltered(&self) -> bool {
        self.seasons.is_empty()
    }

    /// The selected seasons.
    pub fn seasons(&self) -> &BTreeSet<SeasonNumber> {
        &self.seasons
    }

    /// Whether a record passes the filter.
    ///
    /// With a non-empty selection, records whose season is missing or not
    /// selected are excluded.
    pub fn matches(&self, record: &GuestAppearanceRecord) -> bool {
        if self.seasons.is_empty() {
            return true;
        }
        match record.season_number {
            Some(season) => self.seasons.contains(&season),
            None => false,
        }
    }
}

impl FromIterator<SeasonNumber> for SeasonFilter {
    fn from_iter<T: IntoIterator<Item = SeasonNumber>>(iter: T) -> Self {
        Self {
            seasons: iter.into_iter().collect(),
        }
    }
}

/// A guest together with the number of distinct episodes they appear in
/// within the active filter. Derived per request, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestEpisodeCount {
    /// Name of the guest.
    pub person_name: String,
    /// Count of distinct episode names for this guest.
    pub episode_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(person: &str, season: Option<u32>, episode: &str) -> GuestAppearanceRecord {
        GuestAppearanceRecord::new(person, season.map(SeasonNumber), episode)
    }

    #[test]
    fn test_seasons_are_distinct_and_sorted() {
        let table = AppearanceTable::new(vec![
            record("Randy", Some(3), "Ep1"),
            record("Randy", Some(1), "Ep2"),
            record("Cartman", Some(3), "Ep3"),
            record("Towelie", None, "Ep4"),
        ]);

        assert_eq!(table.seasons(), vec![SeasonNumber(1), SeasonNumber(3)]);
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = SeasonFilter::all();
        assert!(filter.is_unfiltered());
        assert!(filter.matches(&record("Randy", Some(1), "Ep1")));
        assert!(filter.matches(&record("Towelie", None, "Ep2")));
    }

    #[test]
    fn test_filter_excludes_missing_seasons() {
        let filter: SeasonFilter = [SeasonNumber(1)].into_iter().collect();
        assert!(filter.matches(&record("Randy", Some(1), "Ep1")));
        assert!(!filter.matches(&record("Randy", Some(2), "Ep2")));
        assert!(!filter.matches(&record("Towelie", None, "Ep3")));
    }

    #[test]
    fn test_season_number_serializes_transparently() {
        let json = serde_json::to_string(&SeasonNumber(7)).unwrap();
        assert_eq!(json, "7");
        let parsed: SeasonNumber = serde_json::from_str("7").unwrap();
        assert_eq!(parsed, SeasonNumber(7));
    }
}
