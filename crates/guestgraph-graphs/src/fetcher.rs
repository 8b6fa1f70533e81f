//! Startup loading of the guest-appearance CSV.

use guestgraph_common::{
    AppearanceTable, GuestAppearanceRecord, GuestGraphError, Result, SeasonNumber,
};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Columns the source CSV must provide.
const REQUIRED_COLUMNS: [&str; 3] = ["person_name", "season_number", "episode_name"];

/// One CSV row as it arrives from the source, before validation.
///
/// Every field is optional here; the loader decides which gaps drop the row
/// and which are tolerated.
#[derive(Debug, Deserialize)]
struct RawAppearanceRow {
    person_name: Option<String>,
    season_number: Option<String>,
    episode_name: Option<String>,
}

/// Fetches the guest-appearance CSV and parses it into a typed table.
///
/// Runs once at process startup. A failure here is fatal: the server cannot
/// serve without data.
#[derive(Debug)]
pub struct DataFetcher {
    client: reqwest::Client,
    source_url: Url,
}

impl DataFetcher {
    /// Creates a fetcher for the given source URL.
    pub fn new(source_url: &str, timeout: Duration) -> Result<Self> {
        let source_url = Url::parse(source_url).map_err(|e| {
            GuestGraphError::load_with_source(format!("invalid data source URL: {source_url}"), e)
        })?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GuestGraphError::load_with_source("failed to build HTTP client", e))?;

        Ok(Self { client, source_url })
    }

    /// Fetches and parses the source CSV into an [`AppearanceTable`].
    pub async fn load(&self) -> Result<AppearanceTable> {
        let response = self
            .client
            .get(self.source_url.clone())
            .send()
            .await
            .map_err(|e| {
                GuestGraphError::load_with_source(
                    format!("failed to fetch {}", self.source_url),
                    e,
                )
            })?
            .error_for_status()
            .map_err(|e| {
                GuestGraphError::load_with_source(
                    format!("data source returned an error status: {}", self.source_url),
                    e,
                )
            })?;

        let body = response
            .text()
            .await
            .map_err(|e| GuestGraphError::load_with_source("failed to read response body", e))?;

        let records = parse_records(&body)?;
        info!(
            records = records.len(),
            source = %self.source_url,
            "appearance table loaded"
        );

        Ok(AppearanceTable::new(records))
    }
}

/// Parses CSV text into validated appearance records.
///
/// Rows without a person or episode name are silently dropped. A season that
/// fails to parse as a number is treated as missing. A header row missing any
/// required column makes the whole resource unparsable.
pub fn parse_records(data: &str) -> Result<Vec<GuestAppearanceRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(data.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| GuestGraphError::load_with_source("failed to read CSV header", e))?;
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(GuestGraphError::load(format!(
                "CSV is missing required column '{column}'"
            )));
        }
    }

    let mut records = Vec::new();
    let mut dropped = 0usize;

    for row in reader.deserialize::<RawAppearanceRow>() {
        let row = row.map_err(|e| GuestGraphError::load_with_source("malformed CSV row", e))?;

        let (person_name, episode_name) = match (non_empty(row.person_name), non_empty(row.episode_name)) {
            (Some(person), Some(episode)) => (person, episode),
            _ => {
                dropped += 1;
                continue;
            }
        };

        records.push(GuestAppearanceRecord {
            person_name,
            season_number: parse_season(row.season_number.as_deref()),
            episode_name,
        });
    }

    if dropped > 0 {
        debug!(dropped, "dropped rows with missing person or episode name");
    }

    Ok(records)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Seasons arrive as integers or float-formatted strings ("10" or "10.0");
/// anything else counts as missing.
fn parse_season(value: Option<&str>) -> Option<SeasonNumber> {
    let raw = value?.trim();
    if raw.is_empty() {
        return None;
    }
    let number: f64 = raw.parse().ok()?;
    if !number.is_finite() || number < 0.0 {
        return None;
    }
    Some(SeasonNumber(number as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_csv() {
        let data = "person_name,season_number,episode_name\n\
                    Randy,1,Ep1\n\
                    Cartman,2,Ep3\n";
        let records = parse_records(data).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].person_name, "Randy");
        assert_eq!(records[0].season_number, Some(SeasonNumber(1)));
        assert_eq!(records[0].episode_name, "Ep1");
    }

    #[test]
    fn test_rows_missing_person_name_are_dropped() {
        let data = "person_name,season_number,episode_name\n\
                    ,1,Ep1\n\
                    Randy,1,Ep2\n";
        let records = parse_records(data).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].person_name, "Randy");
    }

    #[test]
    fn test_rows_missing_episode_name_are_dropped() {
        let data = "person_name,season_number,episode_name\n\
                    Randy,1,\n\
                    Randy,1,Ep2\n";
        let records = parse_records(data).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].episode_name, "Ep2");
    }

    #[test]
    fn test_float_formatted_seasons_parse() {
        let data = "person_name,season_number,episode_name\n\
                    Randy,10.0,Ep1\n";
        let records = parse_records(data).unwrap();

        assert_eq!(records[0].season_number, Some(SeasonNumber(10)));
    }

    #[test]
    fn test_unparsable_season_is_missing() {
        let data = "person_name,season_number,episode_name\n\
                    Randy,special,Ep1\n\
                    Randy,,Ep2\n";
        let records = parse_records(data).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].season_number, None);
        assert_eq!(records[1].season_number, None);
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let data = "person_name,season_number,episode_name,air_date\n\
                    Randy,1,Ep1,2005-03-09\n";
        let records = parse_records(data).unwrap();

        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_missing_required_column_fails_load() {
        let data = "person_name,episode_name\nRandy,Ep1\n";
        let err = parse_records(data).unwrap_err();
        assert!(err.to_string().contains("season_number"));
    }

    #[test]
    fn test_invalid_url_is_a_load_error() {
        let err = DataFetcher::new("not a url", Duration::from_secs(5)).unwrap_err();
        assert!(matches!(err, GuestGraphError::Load { .. }));
    }
}
