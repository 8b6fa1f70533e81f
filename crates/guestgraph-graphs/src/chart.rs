//! Declarative bar chart specification.

use guestgraph_common::GuestEpisodeCount;
use serde::{Deserialize, Serialize};

/// Chart title used for the guest ranking.
pub const CHART_TITLE: &str = "Top 10 Guests by Episode Count";
/// X axis title.
pub const X_AXIS_TITLE: &str = "Episode Count";
/// Y axis title.
pub const Y_AXIS_TITLE: &str = "Person Name";
/// Plot background color.
pub const BACKGROUND_COLOR: &str = "#FFFFFF";

/// One horizontal bar: a guest and their episode count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartBar {
    /// Bar label (the guest name), shown on the y axis.
    pub label: String,
    /// Bar length (the episode count).
    pub value: u32,
    /// Numeric label displayed outside the bar.
    pub value_label: String,
}

/// Declarative description of a horizontal bar chart.
///
/// Bars are ordered top-to-bottom, largest value first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSpec {
    /// Chart title.
    pub title: String,
    /// X axis title.
    pub x_axis_title: String,
    /// Y axis title.
    pub y_axis_title: String,
    /// Plot background color (hex).
    pub background_color: String,
    /// Bars, largest first.
    pub bars: Vec<ChartBar>,
}

impl ChartSpec {
    /// Whether the chart has no bars to draw.
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

/// Builds the bar chart spec for a ranked guest list.
///
/// Pure function: one bar per entry in the given order (the aggregation
/// already ranks largest-first), value labels rendered outside the bars.
/// Zero entries produce a spec with no bars, which renders as an empty chart.
pub fn bar_chart(result: &[GuestEpisodeCount]) -> ChartSpec {
    let bars = result
        .iter()
        .map(|entry| ChartBar {
            label: entry.person_name.clone(),
            value: entry.episode_count,
            value_label: entry.episode_count.to_string(),
        })
        .collect();

    ChartSpec {
        title: CHART_TITLE.to_string(),
        x_axis_title: X_AXIS_TITLE.to_string(),
        y_axis_title: Y_AXIS_TITLE.to_string(),
        background_color: BACKGROUND_COLOR.to_string(),
        bars,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts() -> Vec<GuestEpisodeCount> {
        vec![
            GuestEpisodeCount {
                person_name: "Randy".to_string(),
                episode_count: 2,
            },
            GuestEpisodeCount {
                person_name: "Cartman".to_string(),
                episode_count: 1,
            },
        ]
    }

    #[test]
    fn test_bar_chart_spec() {
        let spec = bar_chart(&counts());

        assert_eq!(spec.title, "Top 10 Guests by Episode Count");
        assert_eq!(spec.x_axis_title, "Episode Count");
        assert_eq!(spec.y_axis_title, "Person Name");
        assert_eq!(spec.background_color, "#FFFFFF");

        assert_eq!(spec.bars.len(), 2);
        assert_eq!(spec.bars[0].label, "Randy");
        assert_eq!(spec.bars[0].value, 2);
        assert_eq!(spec.bars[0].value_label, "2");
        assert_eq!(spec.bars[1].label, "Cartman");
    }

    #[test]
    fn test_empty_result_builds_empty_spec() {
        let spec = bar_chart(&[]);
        assert!(spec.is_empty());
        assert_eq!(spec.title, CHART_TITLE);
    }

    #[test]
    fn test_spec_serializes_to_json() {
        let json = serde_json::to_value(bar_chart(&counts())).unwrap();
        assert_eq!(json["bars"][0]["label"], "Randy");
        assert_eq!(json["bars"][0]["value"], 2);
    }
}
