//! The single dashboard page.

use guestgraph_common::SeasonNumber;
use std::fmt::Write;

/// Placeholder replaced with the `<option>` list at render time.
const OPTIONS_PLACEHOLDER: &str = "__SEASON_OPTIONS__";

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Top 10 South Park Guests by Episode Count</title>
  <style>
    body { font-family: sans-serif; margin: 2rem; background: #ffffff; }
    h1 { text-align: center; }
    .filter { width: 250px; margin-bottom: 20px; }
    .filter select { width: 100%; }
    img { display: block; margin: 0 auto; max-width: 100%; }
  </style>
</head>
<body>
  <h1>Top 10 South Park Guests by Episode Count</h1>

  <div class="filter">
    <label for="season-filter">Select Season(s):</label>
    <select id="season-filter" multiple size="8">__SEASON_OPTIONS__</select>
  </div>

  <img id="bar-chart" src="/chart.png" alt="Top guests by episode count">

  <script>
    const filter = document.getElementById("season-filter");
    filter.addEventListener("change", () => {
      const selected = Array.from(filter.selectedOptions).map(o => o.value);
      const query = selected.length ? "?seasons=" + selected.join(",") : "";
      document.getElementById("bar-chart").src = "/chart.png" + query;
    });
  </script>
</body>
</html>
"#;

/// Renders the dashboard page with one option per distinct season.
///
/// Seasons arrive already sorted ascending from the loaded table; the season
/// list never changes for the lifetime of the process, so the options are
/// baked into the page.
pub fn render_page(seasons: &[SeasonNumber]) -> String {
    let mut options = String::new();
    for season in seasons {
        // Writing to a String cannot fail.
        let _ = write!(options, "\n      <option value=\"{season}\">{season}</option>");
    }
    if !options.is_empty() {
        options.push_str("\n    ");
    }

    PAGE_TEMPLATE.replace(OPTIONS_PLACEHOLDER, &options)
}
