use crate::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// The closed set of chart kinds the engine can standardize and lay out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VisualizationKind {
    ScatterPlot,
    HeatMapUsingBars,
    MultiSeriesBarChart,
    StackedMultiSeriesBarChart,
    PieChart,
}

/// Stable wire vocabulary, indexed by discriminant.
const KIND_TAGS: [(VisualizationKind, &str); 5] = [
    (VisualizationKind::ScatterPlot, "scatter_plot"),
    (VisualizationKind::HeatMapUsingBars, "heat_map_using_bars"),
    (VisualizationKind::MultiSeriesBarChart, "multi_series_bar_chart"),
    (
        VisualizationKind::StackedMultiSeriesBarChart,
        "stacked_multi_series_bar_chart",
    ),
    (VisualizationKind::PieChart, "pie_chart"),
];

fn tag_lookup() -> &'static HashMap<&'static str, VisualizationKind> {
    static LOOKUP: OnceLock<HashMap<&'static str, VisualizationKind>> = OnceLock::new();
    LOOKUP.get_or_init(|| KIND_TAGS.iter().map(|&(kind, tag)| (tag, kind)).collect())
}

impl VisualizationKind {
    pub const ALL: [VisualizationKind; 5] = [
        VisualizationKind::ScatterPlot,
        VisualizationKind::HeatMapUsingBars,
        VisualizationKind::MultiSeriesBarChart,
        VisualizationKind::StackedMultiSeriesBarChart,
        VisualizationKind::PieChart,
    ];

    pub fn as_tag(self) -> &'static str {
        KIND_TAGS[self as usize].1
    }

    /// Resolves a wire tag (e.g. `"pie_chart"`) to its kind.
    pub fn from_tag(tag: &str) -> Result<Self> {
        tag_lookup()
            .get(tag)
            .copied()
            .ok_or_else(|| Error::UnsupportedKind {
                tag: tag.to_string(),
            })
    }
}

impl fmt::Display for VisualizationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl FromStr for VisualizationKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_tag(s)
    }
}

impl Serialize for VisualizationKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_tag())
    }
}

impl<'de> Deserialize<'de> for VisualizationKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Self::from_tag(&tag).map_err(serde::de::Error::custom)
    }
}
